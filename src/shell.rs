//! The shell itself: state, dispatch, and key handling.
//!
//! One [`Shell`] owns all mutable state and a fixed set of command
//! handlers. Everything runs to completion on the caller's thread, one
//! submission or key press at a time; there is nothing to lock and nothing
//! to await.

use crate::alias::AliasRegistry;
use crate::builtin;
use crate::command::{Command, CommandId};
use crate::console::Console;
use crate::files::FileStore;
use crate::history::History;
use crate::text::{self, render, truncate};
use crate::tokenize::explode;

/// Marker prepended to every emission.
const PROMPT: &str = "> ";

/// Write one logical message to the output log, prompt marker included.
pub(crate) fn emit(console: &mut dyn Console, message: &str) {
    console.write_line(&format!("{PROMPT}{message}"));
}

/// Raw key signals the hosting environment forwards to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
}

/// All mutable shell state, owned by one [`Shell`] and handed to command
/// handlers by `&mut`. Constructing it explicitly (instead of reaching for
/// a global) is what makes independent shell instances and deterministic
/// tests possible.
#[derive(Debug, Default)]
pub struct ShellState {
    pub files: FileStore,
    pub aliases: AliasRegistry,
    pub history: History,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The command interpreter.
///
/// Feed it raw lines with [`Shell::submit`] or key signals with
/// [`Shell::key_press`]; it renders all output through the [`Console`]
/// passed to each call, so the same shell can serve a terminal, a test
/// buffer, or any other host.
pub struct Shell {
    state: ShellState,
    commands: Vec<Box<dyn Command>>,
}

impl Shell {
    /// A shell with the full built-in command set and empty state.
    pub fn new() -> Self {
        Self {
            state: ShellState::new(),
            commands: vec![
                Box::new(builtin::About),
                Box::new(builtin::Alias),
                Box::new(builtin::Clear),
                Box::new(builtin::Echo),
                Box::new(builtin::File),
                Box::new(builtin::Help),
                Box::new(builtin::Hist),
            ],
        }
    }

    /// Read-only view of the shell's state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Handle one submission, which may carry several semicolon-delimited
    /// commands. Each piece runs to completion, its own history record
    /// included, before the next begins.
    pub fn submit(&mut self, raw: &str, console: &mut dyn Console) {
        for piece in raw.split(';') {
            self.run(piece, console);
        }
    }

    /// Handle a raw key signal from the host.
    pub fn key_press(&mut self, key: Key, console: &mut dyn Console) {
        match key {
            Key::Up => {
                if let Some(entry) = self.state.history.recall_previous() {
                    console.set_input(entry);
                }
            }
            Key::Down => {
                if let Some(entry) = self.state.history.recall_next() {
                    console.set_input(entry);
                }
            }
            Key::Enter => {
                let raw = console.input_line();
                self.submit(&raw, console);
                console.set_input("");
            }
        }
    }

    /// Dispatch a single line: tokenize, record, resolve, execute.
    fn run(&mut self, raw: &str, console: &mut dyn Console) {
        let input = raw.trim();

        let parts = explode(input, 2);
        let word = parts[0].to_lowercase();
        let arg = parts.get(1).copied();

        if word.is_empty() {
            return;
        }

        // Recorded before dispatch, whatever the outcome.
        self.state.history.record(input);

        // Aliases resolve first, so a binding named like a command shadows
        // it until it is unbound.
        let id = match self.state.aliases.resolve(&word) {
            Some(id) => id,
            None => match CommandId::parse(&word) {
                Some(id) => id,
                None => {
                    emit(
                        console,
                        &render(text::error::INVALID_INPUT, &[("input", &truncate(input))]),
                    );
                    return;
                }
            },
        };

        // The help sentinel short-circuits execution, alias-resolved or not.
        if matches!(arg, Some("?") | Some("help")) {
            emit(console, text::help_for(id));
            return;
        }

        for command in &self.commands {
            if command.id() == id {
                command.execute(arg, &mut self.state, console);
                return;
            }
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    fn submit(shell: &mut Shell, line: &str) -> BufferConsole {
        let mut console = BufferConsole::new();
        shell.submit(line, &mut console);
        console
    }

    #[test]
    fn test_unknown_command_reports_invalid_input() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "frobnicate now");
        assert_eq!(console.output(), ["> Error: 'frobnicate now' is invalid input."]);
    }

    #[test]
    fn test_invalid_input_is_trimmed_and_truncated() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "  zzzz and then some more text  ");
        assert_eq!(
            console.output(),
            ["> Error: 'zzzz and then so...' is invalid input."]
        );
    }

    #[test]
    fn test_empty_line_is_a_silent_no_op() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "   ");
        assert!(console.output().is_empty());
        assert!(shell.state().history.entries().is_empty());
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "ECHO Hello");
        assert_eq!(console.last(), Some("> Hello"));
    }

    #[test]
    fn test_remainder_case_is_preserved() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "echo MiXeD CaSe");
        assert_eq!(console.last(), Some("> MiXeD CaSe"));
    }

    #[test]
    fn test_invalid_lines_are_still_recorded() {
        let mut shell = Shell::new();
        submit(&mut shell, "frobnicate");
        assert_eq!(shell.state().history.entries(), ["frobnicate"]);
    }

    #[test]
    fn test_help_sentinel_shows_page_without_executing() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "file ?");
        let out = console.last().unwrap_or_default().to_string();
        assert!(out.starts_with("> Usage: file"));
        // The handler never ran, so no file named "?" appeared.
        assert!(shell.state().files.is_empty());

        let console = submit(&mut shell, "echo help");
        let out = console.last().unwrap_or_default().to_string();
        assert!(out.starts_with("> Usage: echo"));
    }

    #[test]
    fn test_alias_dispatch_matches_direct_dispatch() {
        let mut shell = Shell::new();
        submit(&mut shell, "alias a echo");

        let via_alias = submit(&mut shell, "a hello world");
        let direct = submit(&mut shell, "echo hello world");
        assert_eq!(via_alias.output(), direct.output());
    }

    #[test]
    fn test_alias_help_sentinel_resolves_to_target_page() {
        let mut shell = Shell::new();
        submit(&mut shell, "alias w echo");
        let console = submit(&mut shell, "w ?");
        let out = console.last().unwrap_or_default().to_string();
        assert!(out.starts_with("> Usage: echo"));
    }

    #[test]
    fn test_alias_named_like_a_command_shadows_it() {
        let mut shell = Shell::new();
        submit(&mut shell, "alias echo hist");
        // "echo" now dispatches through the alias to hist, remainder intact.
        let console = submit(&mut shell, "echo x");
        assert_eq!(
            console.last(),
            Some("> Stack: alias echo hist, echo x\nIndex: 2")
        );

        submit(&mut shell, "alias -remove echo");
        let console = submit(&mut shell, "echo back again");
        assert_eq!(console.last(), Some("> back again"));
    }

    #[test]
    fn test_alias_lifecycle_scenario() {
        let mut shell = Shell::new();

        let console = submit(&mut shell, "alias w echo");
        assert_eq!(console.last(), Some("> Notice: Bound alias w to command echo."));

        let console = submit(&mut shell, "w hi");
        assert_eq!(console.last(), Some("> hi"));

        let console = submit(&mut shell, "alias -remove w");
        assert_eq!(console.last(), Some("> Notice: Deleted and unbound alias w."));

        let console = submit(&mut shell, "w hi");
        assert_eq!(console.last(), Some("> Error: 'w hi' is invalid input."));
    }

    #[test]
    fn test_file_scenario_create_overwrite_get() {
        let mut shell = Shell::new();

        let console = submit(&mut shell, "file -new log.txt hello");
        assert_eq!(
            console.last(),
            Some("> Notice: Created new file log.txt with 5 bytes of data.")
        );

        let console = submit(&mut shell, "file -new log.txt world");
        assert_eq!(
            console.last(),
            Some("> Notice: Overwrote file log.txt with 5 bytes of data.")
        );

        let console = submit(&mut shell, "file -get log.txt");
        assert_eq!(console.last(), Some("> world"));
    }

    #[test]
    fn test_semicolon_submission_dispatches_sequentially() {
        let mut shell = Shell::new();
        let console = submit(&mut shell, "echo a;echo b");
        assert_eq!(console.output(), ["> a", "> b"]);
        assert_eq!(shell.state().history.entries(), ["echo a", "echo b"]);
    }

    #[test]
    fn test_enter_key_submits_and_clears_input() {
        let mut shell = Shell::new();
        let mut console = BufferConsole::new();
        console.set_input("echo from enter");
        shell.key_press(Key::Enter, &mut console);
        assert_eq!(console.output(), ["> from enter"]);
        assert_eq!(console.input_line(), "");
    }

    #[test]
    fn test_arrow_keys_recall_history_into_input() {
        let mut shell = Shell::new();
        let mut console = BufferConsole::new();
        shell.submit("echo one", &mut console);
        shell.submit("echo two", &mut console);

        shell.key_press(Key::Up, &mut console);
        assert_eq!(console.input_line(), "echo two");
        shell.key_press(Key::Up, &mut console);
        assert_eq!(console.input_line(), "echo one");
        // Already at the oldest entry; nothing changes.
        shell.key_press(Key::Up, &mut console);
        assert_eq!(console.input_line(), "echo one");

        shell.key_press(Key::Down, &mut console);
        assert_eq!(console.input_line(), "echo two");
        // Newest entry reached; nothing changes.
        shell.key_press(Key::Down, &mut console);
        assert_eq!(console.input_line(), "echo two");
    }

    #[test]
    fn test_submitting_resets_recall_cursor() {
        let mut shell = Shell::new();
        let mut console = BufferConsole::new();
        shell.submit("echo one", &mut console);
        shell.key_press(Key::Up, &mut console);
        shell.submit("echo two", &mut console);
        assert_eq!(shell.state().history.cursor(), 2);
    }

    #[test]
    fn test_hist_shows_recorded_lines_including_itself() {
        let mut shell = Shell::new();
        submit(&mut shell, "echo a");
        let console = submit(&mut shell, "hist");
        assert_eq!(console.last(), Some("> Stack: echo a, hist\nIndex: 2"));
    }

    #[test]
    fn test_clear_command_erases_prior_output() {
        let mut shell = Shell::new();
        let mut console = BufferConsole::new();
        shell.submit("echo visible", &mut console);
        shell.submit("clear", &mut console);
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_two_shells_are_independent() {
        let mut a = Shell::new();
        let mut b = Shell::new();
        submit(&mut a, "file -new only-in-a x");
        assert!(a.state().files.get("only-in-a").is_some());
        assert!(b.state().files.get("only-in-a").is_none());
        let console = submit(&mut b, "file -get only-in-a");
        assert_eq!(console.last(), Some("> Error: No such file exists."));
    }
}
