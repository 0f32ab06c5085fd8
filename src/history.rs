//! The history stack.
//!
//! A chronological log of every submitted line plus a cursor used for
//! up/down recall. The cursor ranges over `[0, len]`; `cursor == len`
//! means "past the end", i.e. nothing recalled yet.

/// Submitted-line log with a recall cursor.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and park the cursor past the end.
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step the cursor back one entry and return it.
    ///
    /// No-op (returns None) when the cursor is already at the oldest entry.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Step the cursor forward one entry and return it.
    ///
    /// No-op (returns None) when the cursor is at or past the newest entry,
    /// so the cursor never reaches `len` again by navigation alone.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].as_str())
    }

    /// Drop every entry and reset the cursor to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
