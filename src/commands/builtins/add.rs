use crate::commands::registry::ShellCommand;
use crate::errors::ShellResult;
use std::io::Write;

pub const ADD_USAGE_ERROR: &str = "Error: 'add' command requires two integer arguments.";

pub struct AddCommand;

impl AddCommand {
    fn operands(args: &[String]) -> Option<(i32, i32)> {
        match args {
            [a, b, ..] => Some((a.parse().ok()?, b.parse().ok()?)),
            _ => None,
        }
    }
}

impl ShellCommand for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "Add two integers"
    }

    fn execute(&self, args: &[String], out: &mut dyn Write) -> ShellResult<()> {
        match Self::operands(args) {
            // Widen so that i32 extremes cannot overflow
            Some((a, b)) => writeln!(out, "Result: {}", i64::from(a) + i64::from(b))?,
            None => writeln!(out, "{}", ADD_USAGE_ERROR)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        AddCommand.execute(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap().trim_end().to_string()
    }

    #[test]
    fn adds_two_integers() {
        assert_eq!(add(&["2", "3"]), "Result: 5");
        assert_eq!(add(&["-7", "+2"]), "Result: -5");
    }

    #[test]
    fn extra_args_are_ignored() {
        assert_eq!(add(&["1", "2", "oops", "4"]), "Result: 3");
    }

    #[test]
    fn sum_does_not_overflow() {
        assert_eq!(add(&["2147483647", "1"]), "Result: 2147483648");
    }

    #[test]
    fn bad_input_prints_usage_error() {
        assert_eq!(add(&["2", "x"]), ADD_USAGE_ERROR);
        assert_eq!(add(&["2"]), ADD_USAGE_ERROR);
        assert_eq!(add(&[]), ADD_USAGE_ERROR);
        assert_eq!(add(&["1.5", "2"]), ADD_USAGE_ERROR);
        assert_eq!(add(&["99999999999", "1"]), ADD_USAGE_ERROR);
    }
}
