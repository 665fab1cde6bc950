use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "textchanger", bin_name = "textchanger", version)]
#[command(
    about = "Rewrite text through a pipeline of converters",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for the randomized converters (overrides the config file)
    #[arg(long, global = true, value_name = "N", help_heading = "Options")]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories and their options with previews
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only show this category
        category: Option<String>,
    },

    /// Convert text through the selected converters
    #[command(alias = "c", display_order = 2)]
    Convert {
        /// Converter to activate, e.g. "Code Style=Snake Case" (repeatable, applied in order)
        #[arg(short, long = "select", value_name = "CATEGORY=OPTION")]
        select: Vec<String>,

        /// Show the output of every stage
        #[arg(long)]
        explain: bool,

        /// Text to convert (joined with spaces); read from stdin when omitted
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Print the pipeline description for a selection
    #[command(display_order = 3)]
    Describe {
        /// Converter to activate (repeatable, applied in order)
        #[arg(short, long = "select", value_name = "CATEGORY=OPTION")]
        select: Vec<String>,
    },

    /// Start an interactive session
    #[command(display_order = 4)]
    Shell {
        /// Converter to activate before the session starts (repeatable)
        #[arg(short, long = "select", value_name = "CATEGORY=OPTION")]
        select: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (separator, seed)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["textchanger"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn convert_collects_selectors_and_text() {
        let cli = Cli::try_parse_from([
            "textchanger",
            "convert",
            "-s",
            "Code Style=Snake Case",
            "--select",
            "Direction=Reverse",
            "Hello",
            "World",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Convert {
                select,
                explain,
                text,
            }) => {
                assert_eq!(select, vec!["Code Style=Snake Case", "Direction=Reverse"]);
                assert!(!explain);
                assert_eq!(text, vec!["Hello", "World"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["textchanger", "list", "Case", "--seed", "7", "--no-color"])
            .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(cli.no_color);
        match cli.command {
            Some(Commands::List { category }) => assert_eq!(category.as_deref(), Some("Case")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_alias() {
        let cli = Cli::try_parse_from(["textchanger", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List { category: None })));
    }

    #[test]
    fn config_key_and_value() {
        let cli = Cli::try_parse_from(["textchanger", "config", "seed", "3"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("seed"));
                assert_eq!(value.as_deref(), Some("3"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn seed_must_be_numeric() {
        assert!(Cli::try_parse_from(["textchanger", "--seed", "abc"]).is_err());
    }
}
