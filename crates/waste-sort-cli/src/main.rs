use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::{ColoredString, Colorize};
use tracing::Level;

use waste_sort_core::mode::bulk::BulkRunner;
use waste_sort_core::mode::sample::{sample_records, SAMPLE_REPORT_FILE};
use waste_sort_core::{
    category_counts, write_report, Category, Classifier, Config, Record, Result, Session,
};

mod args;
mod interactive;
use args::{Cli, Commands, Shell};

const BULK_USAGE: &str = "Usage: waste-sort bulk <input.txt> [output.csv]";
const UNKNOWN_COMMAND: &str =
    "Unknown command. Use no arguments for interactive, 'bulk' or 'sample'.";

fn main() -> ExitCode {
    let cli = Cli::parse().normalize();
    init_logging(cli.verbose, cli.quiet);

    let result = load_classifier(cli.config.as_deref()).and_then(|classifier| {
        match cli.command {
            None => handle_interactive(classifier, cli.quiet),
            Some(Commands::Bulk {
                input,
                output,
                rest,
            }) => {
                ignore_extra(&rest);
                match input {
                    Some(input) => {
                        handle_bulk(&classifier, &input, output.as_deref(), cli.quiet)
                    }
                    None => {
                        println!("{}", BULK_USAGE);
                        Ok(())
                    }
                }
            }
            Some(Commands::Sample { rest }) => {
                ignore_extra(&rest);
                handle_sample(&classifier, cli.quiet)
            }
            Some(Commands::InitConfig { path }) => handle_init_config(&path),
            Some(Commands::Completions { shell }) => {
                handle_completions(shell);
                Ok(())
            }
            Some(Commands::External(args)) => {
                tracing::debug!(?args, "unrecognized command");
                println!("{}", UNKNOWN_COMMAND);
                Ok(())
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn ignore_extra(rest: &[String]) {
    if !rest.is_empty() {
        tracing::debug!(?rest, "ignoring extra arguments");
    }
}

fn load_classifier(config: Option<&Path>) -> Result<Classifier> {
    match config {
        Some(path) => {
            let config = Config::load(path)?;
            tracing::debug!(path = %path.display(), "loaded keyword config");
            Ok(config.classifier())
        }
        None => Ok(Classifier::builtin()),
    }
}

/// Category text colored by category
pub(crate) fn paint(category: Category, text: &str) -> ColoredString {
    match category {
        Category::Wet => text.green(),
        Category::Dry => text.yellow(),
        Category::Unknown => text.dimmed(),
    }
}

fn handle_interactive(classifier: Classifier, quiet: bool) -> Result<()> {
    let mut session = Session::new(classifier);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    interactive::run(&mut session, &mut input, &mut out, quiet)
}

fn handle_bulk(
    classifier: &Classifier,
    input: &Path,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let outcome = BulkRunner::new(classifier).run(input, output)?;

    println!(
        "Classified {} items. Output -> {}",
        outcome.records.len(),
        outcome.output.display()
    );
    if !quiet {
        print_summary(&outcome.records);
    }
    Ok(())
}

fn handle_sample(classifier: &Classifier, quiet: bool) -> Result<()> {
    let records = sample_records(classifier);

    for record in &records {
        println!(
            " - {:<20} -> {}",
            record.item(),
            paint(record.category(), record.category().as_str())
        );
    }

    write_report(&records, Path::new(SAMPLE_REPORT_FILE))?;
    println!("{} {}", "Saved".green(), SAMPLE_REPORT_FILE);
    if !quiet {
        print_summary(&records);
    }
    Ok(())
}

fn handle_init_config(path: &Path) -> Result<()> {
    Config::init(path)?;
    println!("{} {}", "Initialized:".green(), path.display());
    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "waste-sort", &mut io::stdout());
}

fn print_summary(records: &[Record]) {
    let counts: HashMap<Category, usize> = category_counts(records);

    println!();
    println!("{}", "Summary:".cyan().bold());
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        println!(
            "  {}: {}",
            paint(category, category.as_str()),
            count
        );
    }
}
