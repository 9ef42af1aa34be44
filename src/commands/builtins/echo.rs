use crate::commands::registry::ShellCommand;
use crate::errors::ShellResult;
use std::io::Write;

pub struct EchoCommand;

impl ShellCommand for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Echo arguments separated by single spaces"
    }

    fn execute(&self, args: &[String], out: &mut dyn Write) -> ShellResult<()> {
        writeln!(out, "{}", args.join(" "))?;
        Ok(())
    }
}
