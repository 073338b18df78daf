//! Interactive prompting for the data-entry command.
//!
//! Sequential line-oriented prompts on stdin/stdout, UTF-8 only. A
//! blank answer to a name prompt ends the current entry loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::errors::CliResult;

/// Prompt for a line of input; the answer is trimmed.
pub fn prompt(label: &str) -> CliResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt until the answer parses as `T`.
pub fn prompt_parse<T: FromStr>(label: &str) -> CliResult<T> {
    loop {
        let answer = prompt(label)?;
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(_) => {
                let mut stdout = io::stdout();
                writeln!(stdout, "Invalid value, try again.")?;
            }
        }
    }
}
