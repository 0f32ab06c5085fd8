use anyhow::Context;
use argh::FromArgs;
use minishell::{Console, Key, Shell};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Write};

#[derive(FromArgs)]
/// Interactive terminal front-end for the minishell interpreter.
struct Cli {
    /// prompt shown before each input line
    #[argh(option, short = 'p', default = "String::from(\"$ \")")]
    prompt: String,

    /// do not print the startup banner
    #[argh(switch)]
    no_banner: bool,
}

/// Console backed by the terminal: emissions go straight to stdout and the
/// "input field" is the line rustyline just handed us.
struct TerminalConsole {
    pending: String,
}

impl Console for TerminalConsole {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn clear_output(&mut self) {
        // ANSI clear screen plus cursor home. The sequence carries no
        // newline, so it has to be flushed out explicitly.
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
    }

    fn input_line(&self) -> String {
        self.pending.clone()
    }

    fn set_input(&mut self, text: &str) {
        self.pending = text.to_string();
    }
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = argh::from_env();

    if !cli.no_banner {
        println!("minishell v{} -- type 'help' to get started", env!("CARGO_PKG_VERSION"));
    }

    let mut shell = Shell::new();
    let mut console = TerminalConsole {
        pending: String::new(),
    };
    let mut rl = DefaultEditor::new().context("failed to initialize line editor")?;

    loop {
        match rl.readline(&cli.prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())
                    .context("failed to record history entry")?;
                // Route through the Enter key path so semicolon splitting
                // and core history behave exactly as in the embedded case.
                console.set_input(&line);
                shell.key_press(Key::Enter, &mut console);
            }
            Err(ReadlineError::Interrupted) => {
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                return Err(err).context("readline failed");
            }
        }
    }

    Ok(())
}
