use super::{Key, Terminal};
use crate::errors::{ShellError, ShellResult};
use std::collections::VecDeque;
use std::io::{self, Write};

/// In-memory terminal that replays a key script.
///
/// Output is rendered onto a simple screen model: characters overwrite the
/// current line at the cursor column, `\r` and `\b` move the cursor and `\n`
/// starts a new line. Tests read the screen back to see exactly what a user
/// would be left looking at.
#[derive(Debug)]
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    width: u16,
    lines: Vec<String>,
    current: Vec<char>,
    column: usize,
    /// Rightmost column any character has been written to, plus one
    furthest_column: usize,
    raw: bool,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            width: 80,
            lines: Vec::new(),
            current: Vec::new(),
            column: 0,
            furthest_column: 0,
            raw: false,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Queue each line as typed characters followed by Enter
    pub fn typing<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().flat_map(|line| {
            line.chars()
                .map(Key::Char)
                .chain(std::iter::once(Key::Enter))
                .collect::<Vec<_>>()
        }))
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn push_str(&mut self, text: &str) {
        self.keys.extend(text.chars().map(Key::Char));
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Widest extent reached by any write; past `width` a real terminal would wrap
    pub fn furthest_column(&self) -> usize {
        self.furthest_column
    }

    /// Screen contents with trailing blanks trimmed, including the unfinished line
    pub fn screen(&self) -> Vec<String> {
        self.lines
            .iter()
            .cloned()
            .chain(std::iter::once(self.current.iter().collect()))
            .map(|line: String| line.trim_end().to_string())
            .collect()
    }

    /// The line the cursor is on
    pub fn current_line(&self) -> String {
        self.current.iter().collect::<String>().trim_end().to_string()
    }

    fn put(&mut self, c: char) {
        match c {
            '\r' => self.column = 0,
            '\n' => {
                self.lines.push(self.current.drain(..).collect());
                self.column = 0;
            }
            '\u{8}' => self.column = self.column.saturating_sub(1),
            c => {
                if self.column < self.current.len() {
                    self.current[self.column] = c;
                } else {
                    self.current.resize(self.column, ' ');
                    self.current.push(c);
                }
                self.column += 1;
                self.furthest_column = self.furthest_column.max(self.column);
            }
        }
    }
}

impl Default for ScriptedTerminal {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Terminal for ScriptedTerminal {
    fn read_key(&mut self) -> ShellResult<Key> {
        self.keys.pop_front().ok_or(ShellError::InputClosed)
    }

    fn move_to_column(&mut self, column: u16) -> ShellResult<()> {
        self.column = usize::from(column);
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn set_raw_mode(&mut self, enabled: bool) -> ShellResult<()> {
        self.raw = enabled;
        Ok(())
    }
}

impl Write for ScriptedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        for c in text.chars() {
            self.put(c);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
