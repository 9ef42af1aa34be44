mod add;
mod echo;

pub use add::{AddCommand, ADD_USAGE_ERROR};
pub use echo::EchoCommand;
