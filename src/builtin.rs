//! Built-in command handlers.
//!
//! Each handler is a unit struct implementing [`Command`]. Handlers that
//! take sub-options (`alias`, `file`, `hist`) map the flag spelling to a
//! closed enum before doing anything else, so long and short forms land on
//! the same code path.

use crate::command::{Command, CommandId};
use crate::console::Console;
use crate::files::CreateOutcome;
use crate::shell::{ShellState, emit};
use crate::text::{self, render, truncate};
use crate::tokenize::explode;

/// Sub-operation of the `file` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOp {
    List,
    New,
    Append,
    Get,
    Remove,
}

impl FileOp {
    fn parse(flag: &str) -> Option<Self> {
        match flag {
            "-l" | "-list" => Some(FileOp::List),
            "-n" | "-new" => Some(FileOp::New),
            "-a" | "-append" => Some(FileOp::Append),
            "-g" | "-get" => Some(FileOp::Get),
            "-r" | "-remove" => Some(FileOp::Remove),
            _ => None,
        }
    }
}

/// Sub-operation of the `alias` command. Anything that is not a flag is
/// treated as an alias name to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AliasOp {
    List,
    Remove,
    Bind,
}

impl AliasOp {
    fn parse(flag: &str) -> Self {
        match flag {
            "-l" | "-list" => AliasOp::List,
            "-r" | "-remove" => AliasOp::Remove,
            _ => AliasOp::Bind,
        }
    }
}

pub struct About;

impl Command for About {
    fn id(&self) -> CommandId {
        CommandId::About
    }

    fn execute(&self, _arg: Option<&str>, _state: &mut ShellState, console: &mut dyn Console) {
        emit(console, text::ABOUT);
    }
}

pub struct Alias;

impl Command for Alias {
    fn id(&self) -> CommandId {
        CommandId::Alias
    }

    fn execute(&self, arg: Option<&str>, state: &mut ShellState, console: &mut dyn Console) {
        let Some(arg) = arg else {
            return;
        };

        let args = explode(arg, 2);
        match AliasOp::parse(args[0]) {
            AliasOp::List => {
                if state.aliases.is_empty() {
                    emit(console, text::error::NO_BOUND_ALIASES);
                    return;
                }
                let listing = state
                    .aliases
                    .iter()
                    .map(|(name, target)| format!("{}: {}", name, target.name()))
                    .collect::<Vec<_>>()
                    .join(", ");
                emit(console, &listing);
            }
            AliasOp::Remove => {
                // A missing name behaves like an unbound one.
                let name = args.get(1).copied().unwrap_or_default();
                if !state.aliases.unbind(name) {
                    emit(console, text::error::NO_ALIAS);
                    return;
                }
                emit(console, &render(text::notice::DELETED_ALIAS, &[("alias", name)]));
            }
            AliasOp::Bind => {
                let name = args[0];
                let Some(target) = args.get(1).copied() else {
                    return;
                };
                let Some(id) = CommandId::parse(target) else {
                    emit(console, &render(text::error::NO_COMMAND, &[("command", target)]));
                    return;
                };
                state.aliases.bind(name, id);
                emit(
                    console,
                    &render(text::notice::ALIASED, &[("alias", name), ("command", target)]),
                );
            }
        }
    }
}

pub struct Clear;

impl Command for Clear {
    fn id(&self) -> CommandId {
        CommandId::Clear
    }

    fn execute(&self, _arg: Option<&str>, _state: &mut ShellState, console: &mut dyn Console) {
        console.clear_output();
    }
}

pub struct Echo;

impl Command for Echo {
    fn id(&self) -> CommandId {
        CommandId::Echo
    }

    fn execute(&self, arg: Option<&str>, _state: &mut ShellState, console: &mut dyn Console) {
        match arg {
            Some(s) if !s.is_empty() => emit(console, s),
            _ => {}
        }
    }
}

pub struct File;

impl Command for File {
    fn id(&self) -> CommandId {
        CommandId::File
    }

    fn execute(&self, arg: Option<&str>, state: &mut ShellState, console: &mut dyn Console) {
        let Some(arg) = arg else {
            return;
        };

        let args = explode(arg, 3);
        let Some(op) = FileOp::parse(args[0]) else {
            return;
        };
        let name = args.get(1).copied();
        let content = args.get(2).copied().unwrap_or_default();

        match op {
            FileOp::List => {
                if state.files.is_empty() {
                    emit(console, text::error::NO_FILES);
                    return;
                }
                let listing = state
                    .files
                    .iter()
                    .map(|(name, content)| {
                        format!("{}: {} ({})", name, truncate(content), content.len())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                emit(console, &listing);
            }
            FileOp::New => {
                let Some(name) = name else {
                    return;
                };
                let verb = match state.files.create(name, content) {
                    CreateOutcome::Created => "Created new",
                    CreateOutcome::Overwrote => "Overwrote",
                };
                emit(
                    console,
                    &render(
                        text::notice::FILE_WRITTEN,
                        &[("verb", verb), ("file", name), ("size", &content.len().to_string())],
                    ),
                );
            }
            FileOp::Append => {
                let name = name.unwrap_or_default();
                if !state.files.append(name, content) {
                    emit(console, text::error::NO_FILE);
                    return;
                }
                emit(
                    console,
                    &render(
                        text::notice::APPENDED,
                        &[("size", &content.len().to_string()), ("file", name)],
                    ),
                );
            }
            FileOp::Get => match state.files.get(name.unwrap_or_default()) {
                Some(content) => emit(console, content),
                None => emit(console, text::error::NO_FILE),
            },
            FileOp::Remove => {
                let name = name.unwrap_or_default();
                if !state.files.remove(name) {
                    emit(console, text::error::NO_FILE);
                    return;
                }
                emit(console, &render(text::notice::DELETED_FILE, &[("file", name)]));
            }
        }
    }
}

pub struct Help;

impl Command for Help {
    fn id(&self) -> CommandId {
        CommandId::Help
    }

    fn execute(&self, _arg: Option<&str>, _state: &mut ShellState, console: &mut dyn Console) {
        let commands = CommandId::ALL
            .iter()
            .map(|id| id.name())
            .collect::<Vec<_>>()
            .join(", ");
        emit(console, &render(text::HELP, &[("commands", &commands)]));
    }
}

pub struct Hist;

impl Command for Hist {
    fn id(&self) -> CommandId {
        CommandId::Hist
    }

    fn execute(&self, arg: Option<&str>, state: &mut ShellState, console: &mut dyn Console) {
        if matches!(arg, Some("-c") | Some("-clear")) {
            state.history.clear();
            emit(console, text::notice::CLEARED_STACK);
            return;
        }

        let stack = state.history.entries().join(", ");
        let index = state.history.cursor().to_string();
        emit(console, &render(text::HISTORY, &[("stack", &stack), ("index", &index)]));
    }
}
