//! Where the session reads answers from and writes prompts to.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use inquire::InquireError;

/// Returns true if running in an interactive terminal (both stdin and stdout are TTYs).
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

pub trait Prompter {
    /// Show `prompt` and read one answer. `None` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print a line of informational text.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Report a rejected answer.
    fn warn(&mut self, message: &str) -> Result<()>;
}

/// Line oriented prompter over any reader/writer pair.
///
/// Prompts are written verbatim without a trailing newline, so a piped
/// transcript reads the same as a terminal session minus the echoed answers.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Raw bytes: a line that is not UTF-8 is still an answer, not an I/O failure
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

/// Interactive terminal prompter backed by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match inquire::Text::new(prompt.trim_end()).prompt() {
            Ok(answer) => Ok(Some(answer)),
            // Esc ends the list the same way as closing stdin
            Err(InquireError::OperationCanceled) => Ok(None),
            Err(InquireError::OperationInterrupted) => bail!("Interrupted"),
            Err(e) => Err(e).context("Failed to read from terminal"),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        println!("{}", message.yellow());
        Ok(())
    }
}

/// Scripted prompter for tests: hands out canned answers and records everything shown.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(format!("? {prompt}"));
        Ok(self.answers.pop_front())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.transcript.push(format!("! {message}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_prompter_reads_lines() {
        let mut p = LinePrompter::new(Cursor::new("rec A\r\n1 2\n"), Vec::new());
        assert_eq!(p.read_line("Name: ").unwrap().as_deref(), Some("rec A"));
        assert_eq!(p.read_line("Coords: ").unwrap().as_deref(), Some("1 2"));
        assert_eq!(p.read_line("More: ").unwrap(), None);
        assert_eq!(
            String::from_utf8(p.into_writer()).unwrap(),
            "Name: Coords: More: "
        );
    }

    #[test]
    fn test_line_prompter_replaces_invalid_utf8() {
        let mut p = LinePrompter::new(Cursor::new(&b"rec \xffbox\n1 2\n"[..]), Vec::new());
        assert_eq!(
            p.read_line("").unwrap().as_deref(),
            Some("rec \u{FFFD}box")
        );
        assert_eq!(p.read_line("").unwrap().as_deref(), Some("1 2"));
    }

    #[test]
    fn test_line_prompter_last_line_without_newline() {
        let mut p = LinePrompter::new(Cursor::new("stop"), Vec::new());
        assert_eq!(p.read_line("").unwrap().as_deref(), Some("stop"));
    }

    #[test]
    fn test_line_prompter_messages() {
        let mut p = LinePrompter::new(Cursor::new(""), Vec::new());
        p.say("hello").unwrap();
        p.warn("careful").unwrap();
        assert_eq!(String::from_utf8(p.into_writer()).unwrap(), "hello\ncareful\n");
    }
}
