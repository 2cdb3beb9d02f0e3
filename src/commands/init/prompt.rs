//! User interaction utilities for init command

use anyhow::Result;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-based prompts over any reader/writer pair.
///
/// Answers are trimmed. End of input reads as an empty answer, so a closed
/// stdin behaves like the operator pressing Enter at every prompt.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process console
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` (no newline) and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        self.input.read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Yes/no prompt defaulting to no; only `y` (any case) confirms
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writer used for prompts and messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
