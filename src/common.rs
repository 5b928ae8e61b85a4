// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Common utilities for parsing ISPD input/output files

use nom::{
    character::complete::i64 as parse_i64, combinator::all_consuming, number::complete::double,
    IResult, Parser,
};

use crate::error::{FormatError, FormatErrorKind};
use crate::preprocessor::{LineCursor, LogicalLine};

fn integer(input: &str) -> IResult<&str, i64> {
    parse_i64(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    double(input)
}

/// Parse a whole token as a signed integer ("-12", "+3", "40").
pub fn parse_integer(token: &str) -> Option<i64> {
    all_consuming(integer)
        .parse(token)
        .ok()
        .map(|(_, value)| value)
}

/// Parse a whole token as a floating point number ("35", "0.0001", "1e-3").
pub fn parse_number(token: &str) -> Option<f64> {
    all_consuming(number).parse(token).ok().map(|(_, value)| value)
}

/// Split a line into exactly `N` tokens.
pub fn fields<'a, const N: usize>(line: &LogicalLine<'a>) -> Result<[&'a str; N], FormatError> {
    let tokens = line.tokens();
    let found = tokens.len();
    tokens.try_into().map_err(|_| {
        line.error(FormatErrorKind::FieldCount { expected: N, found })
    })
}

pub fn integer_field(line: &LogicalLine<'_>, token: &str) -> Result<i64, FormatError> {
    parse_integer(token).ok_or_else(|| {
        line.error(FormatErrorKind::InvalidInteger {
            token: token.to_string(),
        })
    })
}

pub fn number_field(line: &LogicalLine<'_>, token: &str) -> Result<f64, FormatError> {
    parse_number(token).ok_or_else(|| {
        line.error(FormatErrorKind::InvalidNumber {
            token: token.to_string(),
        })
    })
}

/// A `tag label count` line introducing a block of `count` entries,
/// e.g. `num sink 128` or `num blockage 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountHeader<'a> {
    pub tag: &'a str,
    pub label: &'a str,
    pub count: usize,
}

pub fn count_header<'a>(line: &LogicalLine<'a>) -> Result<CountHeader<'a>, FormatError> {
    let [tag, label, count] = fields::<3>(line)?;
    let count = usize::try_from(integer_field(line, count)?).map_err(|_| {
        line.error(FormatErrorKind::InvalidInteger {
            token: count.to_string(),
        })
    })?;
    Ok(CountHeader { tag, label, count })
}

/// Read exactly `count` entry lines, converting each with `parse_entry`.
///
/// Consumes nothing past the last entry, so the following header stays
/// available to the caller. The reservation is capped by the lines actually
/// left, so an absurd count ends in `UnexpectedEof` instead of an allocation.
pub fn read_entries<'a, T, F>(
    cursor: &mut LineCursor<'a>,
    count: usize,
    what: &str,
    mut parse_entry: F,
) -> Result<Vec<T>, FormatError>
where
    F: FnMut(&LogicalLine<'a>) -> Result<T, FormatError>,
{
    let mut entries = Vec::with_capacity(count.min(cursor.remaining()));
    for i in 0..count {
        let line = cursor.next_line(&format!("{what} {} of {count}", i + 1))?;
        entries.push(parse_entry(&line)?);
    }
    Ok(entries)
}

/// Read a count header followed by its entries.
pub fn read_block<'a, T, F>(
    cursor: &mut LineCursor<'a>,
    what: &str,
    parse_entry: F,
) -> Result<Vec<T>, FormatError>
where
    F: FnMut(&LogicalLine<'a>) -> Result<T, FormatError>,
{
    let line = cursor.next_line(&format!("{what} count header"))?;
    let header = count_header(&line)?;
    read_entries(cursor, header.count, what, parse_entry)
}
