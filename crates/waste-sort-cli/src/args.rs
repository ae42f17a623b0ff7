use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "waste-sort")]
#[command(about = "Classify waste items as wet (biodegradable) or dry")]
#[command(version)]
#[command(allow_external_subcommands = true)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Keyword config file (TOML) extending the builtin keyword lists
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // no subcommand: interactive mode
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every line of a text file into a CSV report
    Bulk {
        /// Input file, one item per line
        input: Option<PathBuf>,

        /// Output CSV (default: <input name>_classified.csv)
        output: Option<PathBuf>,

        /// Ignored
        #[arg(hide = true)]
        rest: Vec<String>,
    },

    /// Classify a fixed demonstration list into sample_waste_report.csv
    Sample {
        /// Ignored
        #[arg(hide = true)]
        rest: Vec<String>,
    },

    /// Write a commented keyword config template
    InitConfig {
        /// Destination file
        #[arg(default_value = "waste-sort.toml")]
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Commands also accepted in any letter case
const CASE_INSENSITIVE_COMMANDS: &[&str] = &["bulk", "sample"];

impl Cli {
    /// Re-parse `BULK`, `Sample`, ... as their lowercase subcommand
    ///
    /// clap matches subcommand names exactly, so these arrive as external
    /// subcommands. Flags given before the command are kept.
    pub fn normalize(self) -> Self {
        let Some(Commands::External(args)) = &self.command else {
            return self;
        };
        let Some(name) = args.first().and_then(|a| a.to_str()).map(str::to_lowercase) else {
            return self;
        };
        if !CASE_INSENSITIVE_COMMANDS.contains(&name.as_str()) {
            return self;
        }

        let argv = [OsString::from("waste-sort"), OsString::from(name)]
            .into_iter()
            .chain(args[1..].iter().cloned());
        match Cli::try_parse_from(argv) {
            Ok(parsed) => Self {
                verbose: self.verbose || parsed.verbose,
                quiet: self.quiet || parsed.quiet,
                config: parsed.config.or(self.config),
                command: parsed.command,
            },
            Err(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["waste-sort"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_bulk_args() {
        let cli = Cli::try_parse_from(["waste-sort", "bulk", "in.txt", "out.csv"]).unwrap();
        match cli.command {
            Some(Commands::Bulk { input, output, .. }) => {
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("expected bulk"),
        }
    }

    #[test]
    fn test_bulk_without_input_parses() {
        let cli = Cli::try_parse_from(["waste-sort", "bulk"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Bulk { input: None, .. })
        ));
    }

    #[test]
    fn test_unknown_command_is_external() {
        let cli = Cli::try_parse_from(["waste-sort", "recycle", "now"]).unwrap();
        match cli.command {
            Some(Commands::External(args)) => {
                assert_eq!(args, vec![OsString::from("recycle"), OsString::from("now")])
            }
            _ => panic!("expected external"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["waste-sort", "sample", "--config", "k.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("k.toml")));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let cli = Cli::try_parse_from(["waste-sort", "sample", "extra"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sample { .. })));

        let cli = Cli::try_parse_from(["waste-sort", "bulk", "in.txt", "out.csv", "more"]).unwrap();
        match cli.command {
            Some(Commands::Bulk { input, output, rest }) => {
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(rest, vec!["more"]);
            }
            _ => panic!("expected bulk"),
        }
    }

    #[test]
    fn test_normalize_uppercase_sample() {
        let cli = Cli::try_parse_from(["waste-sort", "SAMPLE"]).unwrap().normalize();
        assert!(matches!(cli.command, Some(Commands::Sample { .. })));
    }

    #[test]
    fn test_normalize_mixed_case_bulk_keeps_flags() {
        let cli = Cli::try_parse_from(["waste-sort", "-q", "Bulk", "x.txt", "--config", "k.toml"])
            .unwrap()
            .normalize();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("k.toml")));
        match cli.command {
            Some(Commands::Bulk { input, output, .. }) => {
                assert_eq!(input, Some(PathBuf::from("x.txt")));
                assert_eq!(output, None);
            }
            _ => panic!("expected bulk"),
        }
    }

    #[test]
    fn test_normalize_leaves_unknown_commands() {
        let cli = Cli::try_parse_from(["waste-sort", "recycle"]).unwrap().normalize();
        assert!(matches!(cli.command, Some(Commands::External(_))));

        // only bulk and sample fold case
        let cli = Cli::try_parse_from(["waste-sort", "COMPLETIONS", "bash"]).unwrap().normalize();
        assert!(matches!(cli.command, Some(Commands::External(_))));
    }
}
