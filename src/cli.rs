use clap::{ArgAction, Parser};

/// Shell command line arguments
#[derive(Parser, Debug)]
#[command(name = "lineshell", version)]
#[command(about = "An interactive shell with history recall", long_about = None)]
pub struct ShellArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ShellArgs {
    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
