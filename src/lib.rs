pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod errors;
pub mod history;
pub mod repl;
pub mod terminal;
pub mod tokenizer;

use config::ShellConfig;
use errors::ShellResult;
use repl::ShellSession;
use terminal::CrosstermTerminal;

/// Main entry point for the interactive shell on the process's terminal
pub fn run_shell(config: ShellConfig) -> ShellResult<()> {
    let terminal = CrosstermTerminal::new(config.fallback_width);
    ShellSession::new(config, terminal).run()
}
