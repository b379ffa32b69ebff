use anyhow::{bail, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-based prompts over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its terminator.
    /// `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        if s.ends_with('\n') {
            s.pop();
            if s.ends_with('\r') {
                s.pop();
            }
        }
        Ok(Some(s))
    }

    /// Like [`read_line`](Self::read_line), but end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.read_line(prompt)? {
            Some(s) => Ok(s),
            None => bail!("input closed"),
        }
    }

    /// Anything not starting with `y`, including an empty line, is a no.
    pub fn yes_or_no(&mut self, question: &str) -> Result<bool> {
        let reply = self.ask(&format!("{question} (y/n) "))?;
        Ok(first_char(&reply) == Some('y'))
    }
}

/// Lowercased first character, used for menu and yes/no matching.
pub fn first_char(s: &str) -> Option<char> {
    s.chars().next().map(|c| c.to_ascii_lowercase())
}
