//! End-to-end flow over the public API, the way a session drives it:
//! browse, fill the basket, adjust quantities, check the total, empty it.

use std::cell::RefCell;
use std::rc::Rc;
use trolley::api::TrolleyApi;
use trolley::catalog::fixed::FixedCatalog;

#[test]
fn full_shopping_session() {
    let mut api = TrolleyApi::new(FixedCatalog::sample());

    // Browse: full catalog, nothing in the basket yet.
    let browse = api.browse().unwrap();
    assert_eq!(browse.listed_products.len(), 5);
    assert!(browse.listed_products.iter().all(|p| p.in_basket.is_none()));

    // Add a backpack (109.95) twice and a hard drive (64.00) once.
    api.add(1).unwrap();
    api.add(1).unwrap();
    api.add(9).unwrap();

    let view = api.basket_view().unwrap();
    assert_eq!(view.basket_lines.len(), 2);
    assert_eq!(view.basket_lines[0].line_total, "219.90");
    assert_eq!(view.total_price.as_deref(), Some("283.90"));

    // Browsing again reflects the basket quantities.
    let browse = api.browse().unwrap();
    let backpack = browse
        .listed_products
        .iter()
        .find(|p| p.product.id == 1)
        .unwrap();
    assert_eq!(backpack.in_basket, Some(2));

    // Walk the backpack back down; the second decrease removes the entry.
    api.decrease(1).unwrap();
    api.decrease(1).unwrap();
    assert_eq!(api.basket().quantity_of(1), None);

    let view = api.basket_view().unwrap();
    assert_eq!(view.basket_lines.len(), 1);
    assert_eq!(view.total_price.as_deref(), Some("64.00"));

    // Clear and verify the basket is gone.
    api.clear().unwrap();
    assert!(api.basket().is_empty());
    let view = api.basket_view().unwrap();
    assert!(view.basket_lines.is_empty());
    assert!(view.total_price.is_none());
}

#[test]
fn badge_subscriber_tracks_every_mutation() {
    let mut api = TrolleyApi::new(FixedCatalog::sample());

    let badge: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&badge);
    api.basket_mut()
        .subscribe(move |entries| sink.borrow_mut().push(entries.len()));

    api.add(1).unwrap();
    api.add(3).unwrap();
    api.increase(1).unwrap(); // count unchanged, still notified
    api.remove(3).unwrap();
    api.clear().unwrap();

    assert_eq!(*badge.borrow(), vec![1, 2, 2, 1, 0]);
}

#[test]
fn failed_catalog_lookups_leave_the_basket_alone() {
    let mut api = TrolleyApi::new(FixedCatalog::sample());
    api.add(2).unwrap();

    assert!(api.add(999).is_err());
    assert!(api.show(999).is_err());

    assert_eq!(api.basket().distinct_count(), 1);
    assert_eq!(api.basket().quantity_of(2), Some(1));
}
