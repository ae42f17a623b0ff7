//! Interactive read loop over a [`Session`].

use std::io::{self, BufRead, Write};

use colored::Colorize;

use waste_sort_core::{Result, Session, State, Step};

use crate::paint;

const BANNER: &str =
    "Waste Segregation - Wet vs Dry (type 'exit' to stop, 'save <filename>' to save)";

/// Drive `session` until `exit` or end of input
///
/// Save failures are reported on stderr and the loop keeps going. Only
/// console I/O errors end the loop early.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        writeln!(out, "{}", BANNER.cyan().bold())?;
    }

    while session.state() != State::Exiting {
        write!(out, "Enter waste item: ")?;
        out.flush()?;

        let mut line = String::new();
        if read_line_lossy(input, &mut line)? == 0 {
            // EOF acts like `exit`
            writeln!(out)?;
            break;
        }

        match session.handle_line(&line) {
            Ok(Step::Ignored) | Ok(Step::Exit) => {}
            Ok(Step::Classified(record)) => {
                let label = record.category().as_str().to_uppercase();
                writeln!(
                    out,
                    "-> '{}' classified as: {}",
                    record.item(),
                    paint(record.category(), &label)
                )?;
            }
            Ok(Step::Saved { path, count }) => {
                writeln!(
                    out,
                    "{} {} records to {}",
                    "Saved".green(),
                    count,
                    path.display()
                )?;
            }
            Err(e) => eprintln!("{} {}", "[ERROR]".red().bold(), e),
        }
    }

    if session.has_unsaved() {
        write!(out, "Save report? (y/n) ")?;
        out.flush()?;

        let mut answer = String::new();
        read_line_lossy(input, &mut answer)?;

        match session.finish(&answer) {
            Ok(Some(path)) => writeln!(out, "{} {}", "Saved to".green(), path.display())?,
            Ok(None) => {}
            Err(e) => eprintln!("{} {}", "[ERROR]".red().bold(), e),
        }
    }

    if !quiet {
        writeln!(out, "Exiting interactive mode.")?;
    }
    Ok(())
}

/// `read_line` that replaces invalid UTF-8 instead of failing
fn read_line_lossy<R: BufRead>(input: &mut R, line: &mut String) -> io::Result<usize> {
    let mut buf = Vec::new();
    let n = input.read_until(b'\n', &mut buf)?;
    line.push_str(&String::from_utf8_lossy(&buf));
    Ok(n)
}
