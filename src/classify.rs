//! Line classification for SQL dumps
//!
//! Classification is a substring heuristic over raw line bytes, not a parser.
//! Dumps produced by `mysqldump` put one statement per line except for
//! `CREATE TABLE`, whose column definitions span many lines and end with
//! `) ENGINE=...`. Those lines are skipped so they don't count as statements.

use memchr::memmem;

/// Marks the start of a multi-line table definition
pub const CREATE_TABLE_MARKER: &[u8] = b"CREATE TABLE ";

/// Marks an insert statement
pub const INSERT_MARKER: &[u8] = b"INSERT INTO ";

/// Marks a comment line
pub const COMMENT_MARKER: &[u8] = b"--";

/// Closes a table definition
pub const TABLE_END_MARKER: &[u8] = b") ENGINE";

/// Classification state carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Inside a `CREATE TABLE` body; nothing is counted until the closing marker
    TableDefinition,
}

/// Statement category a line is counted under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Table,
    Insert,
    Other,
}

/// Classify a line given the current mode
///
/// Returns the category to count (if any) and the mode for the next line.
/// The line is expected to include its terminator, so a bare `\n` has
/// length 1 and is not counted.
pub fn classify(line: &[u8], mode: Mode) -> (Option<Category>, Mode) {
    match mode {
        Mode::Normal => {
            if contains(line, CREATE_TABLE_MARKER) {
                (Some(Category::Table), Mode::TableDefinition)
            } else if contains(line, INSERT_MARKER) {
                (Some(Category::Insert), Mode::Normal)
            } else if line.len() > 1 && !contains(line, COMMENT_MARKER) {
                (Some(Category::Other), Mode::Normal)
            } else {
                (None, Mode::Normal)
            }
        }
        Mode::TableDefinition => {
            if contains(line, TABLE_END_MARKER) {
                (None, Mode::Normal)
            } else {
                (None, Mode::TableDefinition)
            }
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    memmem::find(haystack, needle).is_some()
}
