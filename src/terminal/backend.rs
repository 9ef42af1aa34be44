use super::{Key, Terminal};
use crate::errors::ShellResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Stdout, Write};

/// Terminal backed by the process's TTY via crossterm
pub struct CrosstermTerminal {
    stdout: Stdout,
    fallback_width: u16,
    raw: bool,
}

impl CrosstermTerminal {
    pub fn new(fallback_width: u16) -> Self {
        Self {
            stdout: io::stdout(),
            fallback_width,
            raw: false,
        }
    }

    fn map_key(key: KeyEvent) -> Key {
        match key.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::Char(c)
            }
            _ => Key::Other,
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> ShellResult<Key> {
        loop {
            // Resize, focus and key-release events are not input
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Self::map_key(key));
                }
            }
        }
    }

    fn move_to_column(&mut self, column: u16) -> ShellResult<()> {
        execute!(self.stdout, cursor::MoveToColumn(column))?;
        Ok(())
    }

    fn width(&self) -> u16 {
        match terminal::size() {
            Ok((columns, _)) => columns,
            Err(e) => {
                log::warn!(
                    "terminal size unavailable ({}), assuming {} columns",
                    e,
                    self.fallback_width
                );
                self.fallback_width
            }
        }
    }

    fn set_raw_mode(&mut self, enabled: bool) -> ShellResult<()> {
        if enabled == self.raw {
            return Ok(());
        }
        if enabled {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        self.raw = enabled;
        Ok(())
    }
}

impl Write for CrosstermTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
