use std::io::{self, BufRead};

use crate::error::Result;

/// Blocking line input for the controller. The whole contract is: block
/// until a full line is available and return it without the trailing
/// newline. Substitutable with a scripted feed in tests.
pub trait LineReader {
    fn read_line(&mut self) -> Result<String>;
}

/// Production reader over standard input.
pub struct StdinReader {
    stdin: io::Stdin,
}

impl StdinReader {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// In-memory feed for driving controller flows in tests. Errors once the
/// script runs out, so a flow that reads more lines than the test supplied
/// fails loudly.
#[cfg(any(test, feature = "test_utils"))]
pub struct ScriptedReader {
    lines: std::collections::VecDeque<String>,
}

#[cfg(any(test, feature = "test_utils"))]
impl ScriptedReader {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_reader_yields_lines_in_order() {
        let mut reader = ScriptedReader::new(["one", "two"]);
        assert_eq!(reader.read_line().unwrap(), "one");
        assert_eq!(reader.read_line().unwrap(), "two");
        assert!(reader.read_line().is_err());
    }
}
