// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Lenient recognizer for the technology preamble of an ISPD problem file.
//!
//! The preamble sits between the sink block and the blockage header. Its
//! layout differs between benchmark generations, so nothing here is allowed
//! to fail: lines that do not look like a known record are counted and
//! skipped.

use super::{BufferType, Technology, WireType};
use crate::common::{parse_integer, parse_number};
use crate::preprocessor::LogicalLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Library {
    None,
    Wire(usize),
    Buffer(usize),
}

#[derive(Debug)]
pub struct TechnologyRecognizer {
    technology: Technology,
    library: Library,
}

impl TechnologyRecognizer {
    pub fn new() -> Self {
        Self {
            technology: Technology::default(),
            library: Library::None,
        }
    }

    pub fn observe(&mut self, line: &LogicalLine<'_>) {
        let tokens = line.tokens();
        if self.observe_tokens(&tokens) {
            return;
        }
        log::debug!("[SKIP] Line {}: {}", line.number, line.text);
        self.technology.skipped_lines += 1;
    }

    fn observe_tokens(&mut self, tokens: &[&str]) -> bool {
        if let Some(library) = library_header(tokens) {
            self.library = library;
            return true;
        }

        match self.library {
            Library::Wire(remaining) if remaining > 0 => {
                if let Some(wire) = wire_type(tokens) {
                    self.technology.wire_types.push(wire);
                    self.library = Library::Wire(remaining - 1);
                    return true;
                }
            }
            Library::Buffer(remaining) if remaining > 0 => {
                if let Some(buffer) = buffer_type(tokens) {
                    self.technology.buffer_types.push(buffer);
                    self.library = Library::Buffer(remaining - 1);
                    return true;
                }
            }
            _ => {}
        }

        match tokens {
            ["simulation", "vdd", a, b] => {
                if let (Some(a), Some(b)) = (parse_number(a), parse_number(b)) {
                    self.technology.vdd = Some((a, b));
                    return true;
                }
            }
            ["limit", "slew", value] => {
                if let Some(value) = parse_number(value) {
                    self.technology.slew_limit = Some(value);
                    return true;
                }
            }
            ["limit", "cap", value] => {
                if let Some(value) = parse_number(value) {
                    self.technology.capacitance_limit = Some(value);
                    return true;
                }
            }
            _ => {}
        }
        false
    }

    pub fn finish(self) -> Technology {
        self.technology
    }
}

impl Default for TechnologyRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn library_header(tokens: &[&str]) -> Option<Library> {
    let [tag, label, count] = tokens else {
        return None;
    };
    if *tag != "num" {
        return None;
    }
    let count = usize::try_from(parse_integer(count)?).ok()?;
    if label.contains("wire") {
        Some(Library::Wire(count))
    } else if label.contains("buffer") {
        Some(Library::Buffer(count))
    } else {
        None
    }
}

fn wire_type(tokens: &[&str]) -> Option<WireType> {
    let [id, capacitance, resistance] = tokens else {
        return None;
    };
    Some(WireType {
        id: parse_integer(id)?,
        capacitance: parse_number(capacitance)?,
        resistance: parse_number(resistance)?,
    })
}

fn buffer_type(tokens: &[&str]) -> Option<BufferType> {
    let [id, name, inverted, input_cap, output_cap, resistance] = tokens else {
        return None;
    };
    Some(BufferType {
        id: parse_integer(id)?,
        name: name.to_string(),
        inverted: parse_integer(inverted)? != 0,
        input_capacitance: parse_number(input_cap)?,
        output_capacitance: parse_number(output_cap)?,
        output_resistance: parse_number(resistance)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Technology {
        let mut recognizer = TechnologyRecognizer::new();
        for line in crate::preprocessor::preprocess(text) {
            recognizer.observe(&line);
        }
        recognizer.finish()
    }

    #[test]
    fn test_full_preamble() {
        let tech = recognize(
            "num wirelib 2\n\
             0 0.0001 0.0002\n\
             1 0.00005 0.0001\n\
             num buffer 1\n\
             0 BUF_X1 0 35 80 61.2\n\
             simulation vdd 1.0 1.2\n\
             limit slew 100\n\
             limit cap 35000\n",
        );
        assert_eq!(tech.wire_types.len(), 2);
        assert_eq!(tech.wire_types[1].id, 1);
        assert_eq!(tech.buffer_types[0].name, "BUF_X1");
        assert!(!tech.buffer_types[0].inverted);
        assert_eq!(tech.buffer_types[0].output_resistance, 61.2);
        assert_eq!(tech.vdd, Some((1.0, 1.2)));
        assert_eq!(tech.slew_limit, Some(100.0));
        assert_eq!(tech.capacitance_limit, Some(35000.0));
        assert_eq!(tech.skipped_lines, 0);
    }

    #[test]
    fn test_unknown_lines_are_counted() {
        let tech = recognize("some vendor note\nnum wire 1\nnot a wire line at all\n");
        assert!(tech.wire_types.is_empty());
        assert_eq!(tech.skipped_lines, 2);
    }

    #[test]
    fn test_library_entries_beyond_count_are_skipped() {
        let tech = recognize("num wire 1\n0 1 2\n1 3 4\n");
        assert_eq!(tech.wire_types.len(), 1);
        assert_eq!(tech.skipped_lines, 1);
    }
}
