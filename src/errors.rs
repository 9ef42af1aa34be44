use std::io;
use thiserror::Error;

/// Error type for shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Whether the shell loop can report this error and keep prompting
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShellError::UnknownCommand(_))
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_keeps_original_case() {
        let err = ShellError::UnknownCommand("BoGuS".to_string());
        assert_eq!(err.to_string(), "Unknown command: BoGuS");
        assert!(err.is_recoverable());
    }

    #[test]
    fn io_errors_are_fatal() {
        let err: ShellError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(!err.is_recoverable());
        assert!(!ShellError::InputClosed.is_recoverable());
    }
}
