use calc_core::Calculator;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "> ";
pub const EXIT_COMMAND: &str = "exit";

/// Reads expressions line by line from `input` and writes one result line per
/// expression to `output`, until `exit` or end of input.
///
/// Each line is trimmed before evaluation. A blank line is evaluated like any
/// other and reported as an empty expression.
pub fn run_repl<R: BufRead, W: Write>(
    calculator: &Calculator,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            return Ok(());
        }

        let expression = line.trim();
        if expression == EXIT_COMMAND {
            return Ok(());
        }

        match calculator.evaluate(expression) {
            Ok(value) => writeln!(output, "{} = {}", expression, value)?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }
}
