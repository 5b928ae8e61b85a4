// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! ISPD line preprocessor
//!
//! Both ISPD formats are strictly line oriented. This pass:
//! - Trims every line and drops blank lines
//! - Keeps the original (1-based) line number of every logical line so that
//!   parse errors point at the file the user actually has open
//!
//! The resulting [`LineCursor`] hands out logical lines one at a time and
//! reports truncation as a [`FormatError`].

use crate::error::{FormatError, FormatErrorKind};

/// A non-blank, trimmed line together with its position in the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> LogicalLine<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Whitespace-split tokens of the line.
    pub fn tokens(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }

    pub fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.number, kind)
    }
}

/// Preprocess raw file content into logical lines.
pub fn preprocess(content: &str) -> Vec<LogicalLine<'_>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(LogicalLine::new(i + 1, trimmed))
            }
        })
        .collect()
}

/// Sequential reader over the logical lines of one file.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<LogicalLine<'a>>,
    pos: usize,
    /// Line number reported when the file ends early.
    eof_line: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: preprocess(content),
            pos: 0,
            eof_line: content.lines().count() + 1,
        }
    }

    /// Take the next logical line, failing with `UnexpectedEof` if the file is
    /// exhausted. `expected` describes what the caller was looking for.
    pub fn next_line(&mut self, expected: &str) -> Result<LogicalLine<'a>, FormatError> {
        match self.lines.get(self.pos) {
            Some(line) => {
                self.pos += 1;
                Ok(*line)
            }
            None => Err(FormatError::new(
                self.eof_line,
                FormatErrorKind::UnexpectedEof {
                    expected: expected.to_string(),
                },
            )),
        }
    }

    pub fn peek(&self) -> Option<&LogicalLine<'a>> {
        self.lines.get(self.pos)
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn eof_line(&self) -> usize {
        self.eof_line
    }
}
