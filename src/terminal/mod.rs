//! Host terminal abstraction.
//!
//! The editor consumes one [`Key`] at a time and writes characters and
//! cursor moves back. [`CrosstermTerminal`] talks to a real TTY;
//! [`ScriptedTerminal`] replays a fixed key sequence into an in-memory screen.

mod backend;
mod scripted;

pub use backend::CrosstermTerminal;
pub use scripted::ScriptedTerminal;

use crate::errors::ShellResult;
use std::io::Write;

/// A single key event as seen by the line editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Backspace,
    /// Any key the editor has no binding for
    Other,
}

/// Key source and output sink for an interactive session
pub trait Terminal: Write {
    /// Block until the next key event
    fn read_key(&mut self) -> ShellResult<Key>;

    /// Move the cursor to a zero-based column on the current line
    fn move_to_column(&mut self, column: u16) -> ShellResult<()>;

    /// Visible line width in columns
    fn width(&self) -> u16;

    /// Switch between raw key capture and normal line-buffered mode
    fn set_raw_mode(&mut self, enabled: bool) -> ShellResult<()>;

    /// End the current line. Raw mode needs the explicit carriage return.
    fn newline(&mut self) -> ShellResult<()> {
        self.write_all(b"\r\n")?;
        self.flush()?;
        Ok(())
    }

    /// Wait for a single key press, e.g. to acknowledge a message
    fn wait_for_key(&mut self) -> ShellResult<Key> {
        self.set_raw_mode(true)?;
        let key = self.read_key();
        self.set_raw_mode(false)?;
        key
    }
}
