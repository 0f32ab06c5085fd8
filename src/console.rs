//! The boundary between the shell core and its host.
//!
//! The core never touches a screen, a DOM node or a terminal directly: it
//! emits rendered lines, clears the output, and repaints the input field
//! through [`Console`]. [`BufferConsole`] is the in-memory implementation
//! used by tests and by hosts that want to capture output themselves.

/// External collaborator the shell writes to and echoes into.
pub trait Console {
    /// Append one logical message to the output log. The text may contain
    /// embedded newlines; it is still one emission.
    fn write_line(&mut self, text: &str);

    /// Erase the output log.
    fn clear_output(&mut self);

    /// The current content of the input field.
    fn input_line(&self) -> String;

    /// Replace the content of the input field (history recall, and the
    /// clear-after-Enter).
    fn set_input(&mut self, text: &str);
}

/// Memory-backed console for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct BufferConsole {
    output: Vec<String>,
    input: String,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every emission so far, oldest first.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The most recent emission, if any.
    pub fn last(&self) -> Option<&str> {
        self.output.last().map(String::as_str)
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn clear_output(&mut self) {
        self.output.clear();
    }

    fn input_line(&self) -> String {
        self.input.clone()
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }
}
