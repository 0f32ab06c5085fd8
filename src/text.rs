//! The message catalog.
//!
//! Every string the shell ever emits lives here as a fixed template with
//! `{placeholder}` slots, rendered by [`render`]. Keeping the text in one
//! place keeps the handlers free of formatting and makes the full output
//! surface reviewable at a glance.

use crate::command::CommandId;
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub const ABOUT: &str = concat!(
    "minishell v",
    env!("CARGO_PKG_VERSION"),
    "\nInformation: minishell is a general-purpose in-memory command line interpreter."
);

pub const HELP: &str = "Command list: {commands}\n\
    Information: Type a question mark or 'help' as the parameter of a command \
    to view instructions for it. For example, 'alias ?' and 'alias help' will \
    both display specific help information for the 'alias' command.";

pub const HISTORY: &str = "Stack: {stack}\nIndex: {index}";

pub mod notice {
    pub const ALIASED: &str = "Notice: Bound alias {alias} to command {command}.";
    pub const DELETED_ALIAS: &str = "Notice: Deleted and unbound alias {alias}.";
    pub const DELETED_FILE: &str = "Notice: Deleted file {file}.";
    pub const CLEARED_STACK: &str = "Notice: Emptied shell stack and reset index.";
    /// Shared by the create and overwrite outcomes; `{verb}` is either
    /// "Created new" or "Overwrote".
    pub const FILE_WRITTEN: &str = "Notice: {verb} file {file} with {size} bytes of data.";
    pub const APPENDED: &str = "Notice: Appended {size} bytes of data to file {file}.";
}

pub mod error {
    pub const INVALID_INPUT: &str = "Error: '{input}' is invalid input.";
    pub const NO_COMMAND: &str = "Error: The command '{command}' does not exist.";
    pub const NO_BOUND_ALIASES: &str = "Error: No aliases have been bound.";
    pub const NO_ALIAS: &str = "Error: No such alias exists.";
    pub const NO_FILES: &str = "Error: No files exist.";
    pub const NO_FILE: &str = "Error: No such file exists.";
}

/// The per-command instruction page shown for the help sentinel (`?`/`help`).
pub fn help_for(id: CommandId) -> &'static str {
    match id {
        CommandId::About => {
            "Usage: about\n\
             Information: The 'about' command displays information about the \
             shell, such as the current version number and a general \
             description of what it is."
        }
        CommandId::Alias => {
            "Usage: alias [alias-name] [command-name]\n\
             Options: -[l]ist, -[r]emove\n\
             Information: The 'alias' command binds a command of an arbitrary \
             name to an existing command.\n\
             Example: 'alias write echo' would allow you to type 'write hello \
             world' and have it output the same as if you were to type 'echo \
             hello world'."
        }
        CommandId::Clear => {
            "Usage: clear\n\
             Information: The 'clear' command clears the contents of the \
             output container."
        }
        CommandId::Echo => {
            "Usage: echo [string]\n\
             Information: The 'echo' command appends a given string to the \
             output container."
        }
        CommandId::File => {
            "Usage: file -[option] ([file-name]) ([file-data])\n\
             Options: -[l]ist, -[n]ew, -[a]ppend, -[g]et, -[r]emove\n\
             Information: The 'file' command allows you to perform basic \
             file-related tasks.\n\
             Example: 'file -new message.txt hello world' would create a new \
             file under the name 'message.txt' and set its contents to 'hello \
             world'. The contents would then be able to be read using 'file \
             -get message.txt'."
        }
        CommandId::Help => {
            "Usage: help\n\
             Information: The 'help' command displays a list of all commands \
             that can be used within the shell, as well as other helpful \
             information."
        }
        CommandId::Hist => {
            "Usage: hist -[option]\n\
             Options: -[c]lear\n\
             Information: The 'hist' command can be used to view the current \
             stack index, and all commands that have been entered prior to the \
             most recent 'hist -clear'. Whilst the console has focus, pressing \
             the up and down arrow keys will decrement and increment the stack \
             index respectively, and cycle through the commands in the command \
             stack."
        }
    }
}

/// Longest content preview shown before clipping (file listings, the
/// invalid-input error).
const PREVIEW_CHARS: usize = 16;

/// Clip `text` to its first 16 characters, marking the cut with an
/// ellipsis. Shorter text passes through unchanged.
pub fn truncate(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let clipped: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{clipped}...")
    } else {
        text.to_string()
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z]+)\}").expect("placeholder pattern is valid"))
}

/// Substitute every `{key}` slot in `template` from `subs`.
///
/// A slot with no matching key is an authoring defect in the catalog, not a
/// runtime condition: it trips a debug assertion and passes through
/// unchanged in release builds. Substituted values may themselves contain
/// braces; only the template's own slots are scanned.
pub fn render(template: &str, subs: &[(&str, &str)]) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match subs.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => (*value).to_string(),
                None => {
                    debug_assert!(false, "no substitution provided for {{{key}}}");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
