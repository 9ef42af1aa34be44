use crate::errors::ShellResult;
use std::collections::HashMap;
use std::io::Write;

/// Trait that every dispatchable command implements
pub trait ShellCommand {
    /// Default name the command registers under (e.g. "echo", "add")
    fn name(&self) -> &'static str;

    /// One-line help text
    fn description(&self) -> &'static str;

    /// Execute the command. `args` excludes the command name itself.
    ///
    /// Bad user input is reported by writing a message to `out`; an `Err`
    /// means the output stream itself failed.
    fn execute(&self, args: &[String], out: &mut dyn Write) -> ShellResult<()>;
}

/// Case-insensitive name → command table
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn ShellCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in commands
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(super::builtins::EchoCommand);
        registry.register(super::builtins::AddCommand);
        registry
    }

    /// Register a command under its own name
    pub fn register<C: ShellCommand + 'static>(&mut self, cmd: C) {
        let name = cmd.name();
        self.register_as(name, cmd);
    }

    /// Register a command under `name`, replacing any command already there
    pub fn register_as<C: ShellCommand + 'static>(&mut self, name: &str, cmd: C) {
        let key = name.to_lowercase();
        if self.commands.insert(key.clone(), Box::new(cmd)).is_some() {
            log::debug!("registry: replaced command '{}'", key);
        }
    }

    /// Find a command by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&dyn ShellCommand> {
        self.commands.get(&name.to_lowercase()).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl ShellCommand for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn description(&self) -> &'static str {
            "Print a fixed string"
        }

        fn execute(&self, _args: &[String], out: &mut dyn Write) -> ShellResult<()> {
            writeln!(out, "{}", self.0)?;
            Ok(())
        }
    }

    fn run(registry: &CommandRegistry, name: &str) -> String {
        let mut out = Vec::new();
        registry.lookup(name).unwrap().execute(&[], &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn builtins_are_registered() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["add", "echo"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn every_builtin_describes_itself() {
        let registry = CommandRegistry::with_builtins();
        for name in registry.names() {
            let command = registry.lookup(name).unwrap();
            assert_eq!(command.name(), name);
            assert!(!command.description().is_empty(), "{} has no description", name);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = CommandRegistry::with_builtins();
        let upper = registry.lookup("ECHO").unwrap();
        let lower = registry.lookup("echo").unwrap();
        assert_eq!(upper.name(), "echo");
        assert!(std::ptr::addr_eq(upper, lower));
        assert!(registry.contains("Add"));
    }

    #[test]
    fn missing_command_is_none() {
        let registry = CommandRegistry::with_builtins();
        assert!(registry.lookup("bogus").is_none());
        assert!(CommandRegistry::new().is_empty());
    }

    #[test]
    fn registering_same_name_replaces() {
        let mut registry = CommandRegistry::new();
        registry.register_as("Greet", Fixed("hello"));
        registry.register_as("GREET", Fixed("howdy"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["greet"]);
        assert_eq!(run(&registry, "greet"), "howdy\n");
    }

    #[test]
    fn register_uses_command_name() {
        let mut registry = CommandRegistry::new();
        registry.register(Fixed("x"));
        assert!(registry.contains("FIXED"));
    }
}
