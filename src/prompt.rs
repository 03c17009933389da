use crate::errors::{PruneError, Result};
use std::io::{BufRead, Write};

/// Interpret one line typed at a y/n prompt
///
/// Returns `None` when the line is not an accepted answer.
pub fn parse_answer(line: &str, default: bool) -> Option<bool> {
    let answer = line.trim_end_matches(['\r', '\n']).to_lowercase();
    match answer.as_str() {
        "y" => Some(true),
        "n" => Some(false),
        "" => Some(default),
        _ => None,
    }
}

/// Where prompts are written and answers read from
pub struct Terminal<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Ask `question` until an accepted answer comes back
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PruneError::InputClosed);
            }

            match parse_answer(&line, default) {
                Some(answer) => return Ok(answer),
                None => log::debug!("Ignoring answer {:?}", line.trim_end()),
            }
        }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Relay text another program printed, as is
    pub fn relay(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }
}
