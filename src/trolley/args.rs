use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trolley")]
#[command(about = "A terminal storefront demo: browse a catalog, fill a basket", long_about = None)]
pub struct Cli {
    /// Base URL of the product catalog API (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Use the bundled sample catalog instead of the network
    #[arg(long)]
    pub offline: bool,

    /// Don't re-print the basket badge after each change
    #[arg(long)]
    pub no_badge: bool,
}

/// One line typed at the session prompt.
///
/// `multicall` makes clap treat the first word as the command itself rather
/// than as a binary name.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List the products in the catalog
    #[command(alias = "ls")]
    Browse,

    /// Show one product in detail
    #[command(alias = "v")]
    Show {
        /// Product id
        id: u64,
    },

    /// Put one (more) of a product in the basket
    #[command(alias = "a")]
    Add {
        /// Product id
        id: u64,
    },

    /// Take a product out of the basket entirely
    #[command(alias = "remove")]
    Rm {
        /// Product id
        id: u64,
    },

    /// Increase a basket quantity by one
    #[command(alias = "+")]
    Inc {
        /// Product id
        id: u64,
    },

    /// Decrease a basket quantity by one (removes the entry at quantity 1)
    #[command(alias = "-")]
    Dec {
        /// Product id
        id: u64,
    },

    /// Show the basket with line and grand totals
    #[command(alias = "b")]
    Basket,

    /// Empty the basket
    Clear,

    /// Get or set configuration (base_url, currency)
    Config {
        /// Config key
        key: Option<String>,
        /// New value for the key
        value: Option<String>,
    },

    /// Leave the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lines_parse_by_first_word() {
        let line = SessionLine::try_parse_from(["add", "3"]).unwrap();
        assert!(matches!(line.command, SessionCommand::Add { id: 3 }));

        let line = SessionLine::try_parse_from(["ls"]).unwrap();
        assert!(matches!(line.command, SessionCommand::Browse));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(SessionLine::try_parse_from(["add", "backpack"]).is_err());
    }

    #[test]
    fn quit_aliases() {
        for word in ["quit", "q", "exit"] {
            let line = SessionLine::try_parse_from([word]).unwrap();
            assert!(matches!(line.command, SessionCommand::Quit));
        }
    }
}
