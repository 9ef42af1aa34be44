pub mod builtins;
pub mod registry;

pub use builtins::{AddCommand, EchoCommand, ADD_USAGE_ERROR};
pub use registry::{CommandRegistry, ShellCommand};
