use crate::{
    compare::{lt, signum},
    reader::Pair,
};

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// `Less`, `Equal` or `Greater`
    Ordering,
    /// `-1`, `0` or `1`
    Signum,
    /// `true` if the left entry sorts strictly before the right one
    Less,
}

impl OutputFormat {
    pub fn render(self, pair: &Pair) -> String {
        let result = match self {
            Self::Ordering => format!("{:?}", pair.ordering()),
            Self::Signum => signum(&pair.left, &pair.right).to_string(),
            Self::Less => lt(&pair.left, &pair.right).to_string(),
        };
        format!("{}: {} vs {} => {result}", pair.index, pair.left, pair.right)
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Compare every pair in a file
    Compare {
        file: std::path::PathBuf,

        /// Specifies how each result is printed
        #[arg(short, long)]
        #[clap(value_enum, default_value_t = OutputFormat::Ordering)]
        format: OutputFormat,
    },

    /// Parse a file without comparing
    Check { file: std::path::PathBuf },
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Cli, Command, OutputFormat};
    use crate::{reader::Pair, value::Value};

    fn pair() -> Pair {
        Pair {
            index: 3,
            left: Value::ints([1, 1]),
            right: Value::ints([1, 1, 1]),
        }
    }

    #[test]
    fn parse_compare_defaults() {
        let cli = Cli::try_parse_from(["listord", "compare", "pairs.txt"]).unwrap();
        match cli.command {
            Command::Compare { file, format } => {
                assert_eq!(file.to_str(), Some("pairs.txt"));
                assert_eq!(format, OutputFormat::Ordering);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_compare_format() {
        let cli =
            Cli::try_parse_from(["listord", "compare", "-f", "signum", "pairs.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Compare {
                format: OutputFormat::Signum,
                ..
            }
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["listord", "compare", "-f", "json", "pairs.txt"]).is_err());
    }

    #[test]
    fn render_formats() {
        let pair = pair();
        assert_eq!(
            OutputFormat::Ordering.render(&pair),
            "3: [1,1] vs [1,1,1] => Less"
        );
        assert_eq!(
            OutputFormat::Signum.render(&pair),
            "3: [1,1] vs [1,1,1] => -1"
        );
        assert_eq!(
            OutputFormat::Less.render(&pair),
            "3: [1,1] vs [1,1,1] => true"
        );
    }
}
