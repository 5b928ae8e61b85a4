// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Parser for ISPD clock-network problem files.
//!
//! ```text
//! 0 0 70000 70000              <- bounds
//! source 0 0 0 BUF_X1          <- tag name x y block
//! num sink 2                   <- sink block
//! 1 1000 2000 35
//! 2 4000 6000 35
//! ...                          <- technology preamble (optional)
//! num blockage 1               <- blockage block
//! 100 100 200 200
//! ```

use std::collections::HashSet;

use super::technology::TechnologyRecognizer;
use super::{ProblemInstance, Rect, Sink, Source, Technology};
use crate::common::{
    count_header, fields, integer_field, number_field, read_block, read_entries, CountHeader,
};
use crate::error::{FormatError, FormatErrorKind};
use crate::preprocessor::{LineCursor, LogicalLine};

pub const BLOCKAGE_SECTION: &str = "blockage";

pub fn parse_input(content: &str) -> Result<ProblemInstance, FormatError> {
    let mut cursor = LineCursor::new(content);

    let bounds = parse_bounds(&mut cursor)?;
    let source = parse_source(&mut cursor)?;
    let sinks = parse_sinks(&mut cursor)?;

    let (header, technology) = seek_section(&mut cursor, BLOCKAGE_SECTION)?;
    let blockages = read_entries(&mut cursor, header.count, "blockage", parse_rect)?;

    if !cursor.is_empty() {
        log::debug!(
            "[INFO] Ignoring {} trailing lines after blockages",
            cursor.remaining()
        );
    }

    Ok(ProblemInstance {
        bounds,
        source,
        sinks,
        technology,
        blockages,
    })
}

fn parse_rect(line: &LogicalLine<'_>) -> Result<Rect, FormatError> {
    let [llx, lly, urx, ury] = fields::<4>(line)?;
    Ok(Rect::new(
        integer_field(line, llx)?,
        integer_field(line, lly)?,
        integer_field(line, urx)?,
        integer_field(line, ury)?,
    ))
}

fn parse_bounds(cursor: &mut LineCursor<'_>) -> Result<Rect, FormatError> {
    let line = cursor.next_line("bounds")?;
    let bounds = parse_rect(&line)?;
    if !bounds.is_proper() {
        return Err(line.error(FormatErrorKind::InvalidBounds));
    }
    Ok(bounds)
}

fn parse_source(cursor: &mut LineCursor<'_>) -> Result<Source, FormatError> {
    let line = cursor.next_line("source description")?;
    let [_tag, name, x, y, block_name] = fields::<5>(&line)?;
    Ok(Source {
        name: name.to_string(),
        x: integer_field(&line, x)?,
        y: integer_field(&line, y)?,
        block_name: block_name.to_string(),
    })
}

fn parse_sinks(cursor: &mut LineCursor<'_>) -> Result<Vec<Sink>, FormatError> {
    let mut seen = HashSet::new();
    read_block(cursor, "sink", |line| {
        let [name, x, y, capacitance] = fields::<4>(line)?;
        if !seen.insert(name) {
            return Err(line.error(FormatErrorKind::DuplicateSink {
                name: name.to_string(),
            }));
        }
        Ok(Sink {
            name: name.to_string(),
            x: integer_field(line, x)?,
            y: integer_field(line, y)?,
            capacitance: number_field(line, capacitance)?,
        })
    })
}

/// Skip the preamble up to the count header naming `section`.
///
/// Every line passed over is offered to the technology recognizer. The scan
/// is bounded by the end of the file; running out of lines is reported as
/// `MissingSection`. A line that mentions `section` but is not a well-formed
/// count header is an error rather than something to skip past.
pub fn seek_section<'a>(
    cursor: &mut LineCursor<'a>,
    section: &str,
) -> Result<(CountHeader<'a>, Technology), FormatError> {
    let mut recognizer = TechnologyRecognizer::new();
    while !cursor.is_empty() {
        let line = cursor.next_line(section)?;
        if line.text.contains(section) {
            let header = count_header(&line)?;
            return Ok((header, recognizer.finish()));
        }
        recognizer.observe(&line);
    }
    Err(FormatError::new(
        cursor.eof_line(),
        FormatErrorKind::MissingSection {
            section: section.to_string(),
        },
    ))
}
