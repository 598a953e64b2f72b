use std::fmt::{Display, Formatter};

use crate::error::ParseIssue::*;

/// Byte range of the document a parse issue points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IssueRange {
    pub start: usize,
    pub end: usize,
}

/// A recoverable defect noticed while parsing.
///
/// The parser never fails on malformed input; it records what it had to
/// work around and keeps going. None of these conditions affect the
/// guarantee that a tree is produced.
#[derive(Debug, PartialEq)]
pub enum ParseIssue {
    /// A closing tag with no matching open tag anywhere on the stack; its
    /// text was kept as literal content.
    UnmatchedCloser { name: String, range: IssueRange },
    /// An open tag that never saw its own closing tag and was force-closed,
    /// either by an ancestor's closer or by the end of the document.
    UnclosedTag { name: String, range: IssueRange },
}

impl Display for ParseIssue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            UnmatchedCloser { name, range } => {
                write!(f, "unmatched closing tag [/{}] at {}..{}", name, range.start, range.end)
            }
            UnclosedTag { name, range } => {
                write!(f, "unclosed tag [{}] at {}..{}, force-closed", name, range.start, range.end)
            }
        }
    }
}
