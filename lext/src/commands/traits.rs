//! Command trait and common types for the lext CLI.
//!
//! This module defines the standard command traits that all commands
//! must implement to ensure consistency across the application.

use tracing::debug;

use crate::error::Result;

/// Standard trait for all CLI commands.
///
/// # Type Parameters
///
/// * `Args` - The argument type for this command
/// * `Output` - The output type returned by successful execution
pub trait Command {
    /// The argument type for this command
    type Args;

    /// The output type for this command
    type Output;

    /// Create a new instance of the command with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name (used for logging).
    fn name() -> &'static str;
}

/// Trait for commands that can describe themselves.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Builds and executes a command, logging which one runs.
pub fn dispatch<C>(args: C::Args) -> Result<C::Output>
where
    C: Command + CommandDescription,
{
    debug!(command = C::name(), "{}", C::description());
    C::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(u32);

    impl Command for Echo {
        type Args = u32;
        type Output = u32;

        fn new(args: u32) -> Self {
            Self(args)
        }

        fn execute(&self) -> Result<u32> {
            Ok(self.0 * 2)
        }

        fn name() -> &'static str {
            "echo"
        }
    }

    impl CommandDescription for Echo {
        fn description() -> &'static str {
            "Doubles its argument"
        }

        fn help() -> &'static str {
            "Test command."
        }
    }

    #[test]
    fn test_dispatch_builds_and_executes() {
        assert_eq!(dispatch::<Echo>(21).unwrap(), 42);
        assert_eq!(Echo::name(), "echo");
        assert_eq!(Echo::help(), "Test command.");
    }
}
