//! # CLI layer
//!
//! The interactive terminal client — one possible UI over the library, and
//! the only code that touches stdout/stderr.
//!
//! - `session`: the rustyline read-eval loop wiring parsed lines to the API
//! - `print`: rendering of `CmdResult` data (colors, column alignment, the
//!   basket badge re-printed by the store subscriber)

pub mod print;
pub mod session;
