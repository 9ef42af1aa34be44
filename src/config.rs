/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Prompt string; the input line starts right after it
    pub prompt: String,
    /// Line that ends the session, compared case-insensitively
    pub exit_command: String,
    /// Printed once the exit command is submitted
    pub exit_message: String,
    /// Line width used for redraw when the terminal cannot report its size
    pub fallback_width: u16,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "shell> ".to_string(),
            exit_command: "exit".to_string(),
            exit_message: "Exiting shell...".to_string(),
            fallback_width: 80,
        }
    }
}

impl ShellConfig {
    /// Column where the editable part of the line begins
    pub fn prompt_column(&self) -> u16 {
        u16::try_from(self.prompt.chars().count()).unwrap_or(u16::MAX)
    }

    /// Check whether a finalized line asks the shell to exit
    pub fn is_exit(&self, line: &str) -> bool {
        line.to_lowercase() == self.exit_command.to_lowercase()
    }
}
