use crate::commands::CommandRegistry;
use crate::config::ShellConfig;
use crate::editor::LineEditor;
use crate::errors::{ShellError, ShellResult};
use crate::history::History;
use crate::terminal::Terminal;
use crate::tokenizer::tokenize;
use std::io::Write;

/// Where the read-eval-print cycle currently is
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Prompting,
    Dispatching(String),
    Exiting,
}

/// An interactive session: terminal, editor, history and commands.
///
/// History and the command registry live for the whole session. The editor's
/// buffer and history cursor are reset at the start of every prompt.
pub struct ShellSession<T: Terminal> {
    config: ShellConfig,
    terminal: T,
    editor: LineEditor,
    history: History,
    registry: CommandRegistry,
}

impl<T: Terminal> ShellSession<T> {
    pub fn new(config: ShellConfig, terminal: T) -> Self {
        Self::with_registry(config, terminal, CommandRegistry::with_builtins())
    }

    pub fn with_registry(config: ShellConfig, terminal: T, registry: CommandRegistry) -> Self {
        let editor = LineEditor::new(config.prompt_column());
        Self {
            config,
            terminal,
            editor,
            history: History::new(),
            registry,
        }
    }

    /// Run until the exit command is entered
    pub fn run(&mut self) -> ShellResult<()> {
        let mut phase = Phase::Prompting;
        loop {
            phase = match phase {
                Phase::Prompting => {
                    write!(self.terminal, "{}", self.config.prompt)?;
                    self.terminal.flush()?;
                    let line = self.editor.read_line(&mut self.terminal, &self.history)?;
                    if self.config.is_exit(&line) {
                        Phase::Exiting
                    } else {
                        Phase::Dispatching(line)
                    }
                }
                Phase::Dispatching(line) => {
                    self.dispatch(&line)?;
                    Phase::Prompting
                }
                Phase::Exiting => {
                    log::debug!("exit requested");
                    writeln!(self.terminal, "{}", self.config.exit_message)?;
                    self.terminal.flush()?;
                    self.terminal.wait_for_key()?;
                    return Ok(());
                }
            };
        }
    }

    /// Execute one finalized line and record it in history.
    ///
    /// Unknown commands are reported to the terminal; only terminal failures
    /// are returned as errors.
    pub fn dispatch(&mut self, line: &str) -> ShellResult<()> {
        match self.execute(line) {
            Err(e) if e.is_recoverable() => writeln!(self.terminal, "{}", e)?,
            result => result?,
        }
        self.terminal.flush()?;

        if self.history.append(line) {
            self.editor.reset_history_cursor();
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> ShellResult<()> {
        let tokens = tokenize(line);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };

        match self.registry.lookup(name) {
            Some(command) => {
                log::debug!("dispatch: {} with {} argument(s)", command.name(), args.len());
                command.execute(args, &mut self.terminal)
            }
            None => Err(ShellError::UnknownCommand(name.clone())),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}
