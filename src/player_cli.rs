#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use crate::coord::Coordinate;
use crate::input::{parse_coordinate, InputError, InputSource};

/// Reads targets line by line, one prompt per axis.
pub struct ConsoleInput<R, W> {
    input: R,
    prompt: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Read from the process's stdin, prompting on stdout.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }

    /// Recover the prompt writer.
    pub fn into_prompt(self) -> W {
        self.prompt
    }

    fn ask(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.prompt, "{}", label)
            .and_then(|()| self.prompt.flush())
            .map_err(|_| InputError::Closed)?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                Err(InputError::Closed)
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_coordinate(&mut self) -> Result<Coordinate, InputError> {
        let _ = writeln!(self.prompt, "Your move:");
        let row = self.ask("Row number - ")?;
        let col = self.ask("Column number - ")?;
        parse_coordinate(&row, &col)
    }
}
