//! Single-line input editor with history recall.
//!
//! The editor owns the line being composed and a cursor into [`History`].
//! Up/Down replace the whole line with a history entry and repaint it from
//! the prompt column; Backspace drops the last character; Enter hands the
//! finished line back to the caller.

use crate::errors::ShellResult;
use crate::history::History;
use crate::terminal::{Key, Terminal};
use std::io::Write;

#[derive(Debug)]
pub struct LineEditor {
    buffer: String,
    /// Offset from the newest history entry; `None` while not browsing
    history_cursor: Option<usize>,
    prompt_column: u16,
}

impl LineEditor {
    pub fn new(prompt_column: u16) -> Self {
        Self {
            buffer: String::new(),
            history_cursor: None,
            prompt_column,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn reset_history_cursor(&mut self) {
        self.history_cursor = None;
    }

    /// Read one finalized line. Blocks until Enter is pressed.
    ///
    /// The terminal is in raw mode only while keys are being read and is put
    /// back even when reading fails.
    pub fn read_line<T: Terminal>(
        &mut self,
        terminal: &mut T,
        history: &History,
    ) -> ShellResult<String> {
        self.buffer.clear();
        self.history_cursor = None;

        terminal.set_raw_mode(true)?;
        let result = self.edit(terminal, history);
        let restored = terminal.set_raw_mode(false);
        let line = result?;
        restored?;
        Ok(line)
    }

    fn edit<T: Terminal>(&mut self, terminal: &mut T, history: &History) -> ShellResult<String> {
        loop {
            let key = terminal.read_key()?;
            if let Some(line) = self.apply(key, terminal, history)? {
                return Ok(line);
            }
        }
    }

    /// Apply a single key event. Returns the finalized line on Enter.
    pub fn apply<T: Terminal>(
        &mut self,
        key: Key,
        terminal: &mut T,
        history: &History,
    ) -> ShellResult<Option<String>> {
        log::trace!("editor: {:?} (cursor {:?})", key, self.history_cursor);

        match key {
            Key::Up => {
                let next = self.history_cursor.map_or(0, |offset| offset + 1);
                if let Some(entry) = history.get(next) {
                    self.history_cursor = Some(next);
                    self.buffer = entry.to_string();
                    self.redraw(terminal)?;
                }
            }
            Key::Down => match self.history_cursor {
                None => {}
                Some(0) => {
                    self.history_cursor = None;
                    self.buffer.clear();
                    self.redraw(terminal)?;
                }
                Some(offset) => {
                    let prev = offset - 1;
                    if let Some(entry) = history.get(prev) {
                        self.history_cursor = Some(prev);
                        self.buffer = entry.to_string();
                        self.redraw(terminal)?;
                    }
                }
            },
            Key::Enter => {
                terminal.newline()?;
                return Ok(Some(std::mem::take(&mut self.buffer)));
            }
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    terminal.write_all(b"\x08 \x08")?;
                }
            }
            Key::Char(c) if !c.is_control() => {
                self.buffer.push(c);
                write!(terminal, "{}", c)?;
            }
            Key::Char(_) | Key::Other => {}
        }

        terminal.flush()?;
        Ok(None)
    }

    /// Blank the line from the prompt to the right edge, then write the buffer
    fn redraw<T: Terminal>(&self, terminal: &mut T) -> ShellResult<()> {
        let blanks = terminal.width().saturating_sub(self.prompt_column);
        terminal.move_to_column(self.prompt_column)?;
        write!(terminal, "{}", " ".repeat(usize::from(blanks)))?;
        terminal.move_to_column(self.prompt_column)?;
        write!(terminal, "{}", self.buffer)?;
        Ok(())
    }
}
