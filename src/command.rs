use crate::console::Console;
use crate::shell::ShellState;

/// Identifier of a built-in command.
///
/// The command set is closed: every command the shell will ever run is a
/// variant here, registered once at [`Shell`](crate::Shell) construction.
/// Lookup goes through [`CommandId::parse`] exactly once per submitted
/// line, after which dispatch is enum-driven rather than string-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommandId {
    About,
    Alias,
    Clear,
    Echo,
    File,
    Help,
    Hist,
}

impl CommandId {
    /// Every command, in the order the `help` listing shows them.
    pub const ALL: [CommandId; 7] = [
        CommandId::About,
        CommandId::Alias,
        CommandId::Clear,
        CommandId::Echo,
        CommandId::File,
        CommandId::Help,
        CommandId::Hist,
    ];

    /// Resolve a (lowercased) command word to its identifier.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "about" => Some(CommandId::About),
            "alias" => Some(CommandId::Alias),
            "clear" => Some(CommandId::Clear),
            "echo" => Some(CommandId::Echo),
            "file" => Some(CommandId::File),
            "help" => Some(CommandId::Help),
            "hist" => Some(CommandId::Hist),
            _ => None,
        }
    }

    /// The user-facing name of the command.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::About => "about",
            CommandId::Alias => "alias",
            CommandId::Clear => "clear",
            CommandId::Echo => "echo",
            CommandId::File => "file",
            CommandId::Help => "help",
            CommandId::Hist => "hist",
        }
    }
}

/// A built-in command handler.
///
/// Handlers are stateless; all shell state arrives by `&mut` and all output
/// leaves through the console. A handler never fails: every error condition
/// it can detect is rendered as a catalog message and control returns to
/// the dispatcher.
pub trait Command {
    /// The identifier this handler is registered under.
    fn id(&self) -> CommandId;

    /// Run the command with the (possibly absent) remainder argument.
    fn execute(&self, arg: Option<&str>, state: &mut ShellState, console: &mut dyn Console);
}
