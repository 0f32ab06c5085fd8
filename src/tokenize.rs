//! Bounded splitting of raw input lines.
//!
//! The shell never parses a full argument vector: a line is cut into a
//! command word and one remainder string, and command handlers that take
//! sub-options cut that remainder again with their own limit. Everything
//! past the last cut stays joined, spaces included, so literal text (an
//! echoed string, file contents) survives untouched.

/// Split `input` on single spaces into at most `limit` fields.
///
/// The first `limit - 1` fields are plain space-delimited tokens; the final
/// field is the untouched remainder, which may itself contain spaces.
/// Consecutive delimiters produce empty leading fields rather than being
/// collapsed, so the remainder is byte-for-byte what the user typed.
///
/// Callers index the result with [`slice::get`], since trailing fields are
/// absent (not empty) when the input has fewer tokens than `limit`.
pub fn explode(input: &str, limit: usize) -> Vec<&str> {
    input.splitn(limit, ' ').collect()
}
