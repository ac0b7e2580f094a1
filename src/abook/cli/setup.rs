use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook", bin_name = "abook", version)]
#[command(about = "Keep track of contacts, phone numbers and birthdays", long_about = None)]
pub struct Cli {
    /// Address book file (defaults to addressbook.json in the data directory)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run one command and exit, e.g. `abook add alex 0503333333`.
    /// Without it an interactive session starts.
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_session() {
        let cli = Cli::try_parse_from(["abook"]).unwrap();
        assert!(cli.command.is_empty());
        assert!(cli.file.is_none());
    }

    #[test]
    fn trailing_words_form_one_command() {
        let cli = Cli::try_parse_from(["abook", "-f", "/tmp/x.json", "add", "alex", "0503333333"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(cli.command, vec!["add", "alex", "0503333333"]);
    }

    #[test]
    fn verbose_flag() {
        let cli = Cli::try_parse_from(["abook", "-v", "all"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, vec!["all"]);
    }
}
