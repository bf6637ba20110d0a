//! Line-oriented interactive mode.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{execute, CliError, Command};
use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "busvoz", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

/// Run commands read from `input` until EOF, `exit` or `quit`. Blank
/// lines and lines starting with `#` are skipped.
///
/// Errors from individual commands are printed and the loop continues;
/// only output failures end it.
pub async fn run_shell<R>(app: &App, input: R, out: &mut dyn Write) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    write!(out, "> ")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(message) => {
                writeln!(out, "error: {}", message)?;
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => {}
            Some(word) if word.starts_with('#') => {}
            Some("exit") | Some("quit") => break,
            Some(_) => match ShellLine::try_parse_from(&words) {
                Ok(ShellLine {
                    command: Command::Shell,
                }) => writeln!(out, "Já está no modo interativo.")?,
                Ok(parsed) => {
                    if let Err(e) = execute(app, parsed.command, out).await {
                        if !e.is_user_error() {
                            return Err(e);
                        }
                        writeln!(out, "error: {}", e)?;
                    }
                }
                Err(e) => write!(out, "{}", e.render())?,
            },
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Split a command line into words, honouring single and double quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
