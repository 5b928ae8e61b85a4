// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Test cases for the ISPD input (problem) parser
//!
//! Tests cover:
//! - A realistic benchmark-style file with technology preamble
//! - Exact consumption of declared counts
//! - Truncation and malformed-token failures

use ispd_cts_viewer::input::parser::parse_input;
use ispd_cts_viewer::input::reader::InputReader;
use ispd_cts_viewer::{FormatErrorKind, Rect, ViewerError};
use pretty_assertions::assert_eq;

fn data_path(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_read_small_benchmark() {
    let problem = InputReader::new().read(data_path("small.in")).unwrap();

    assert_eq!(problem.bounds, Rect::new(0, 0, 10000, 8000));
    assert_eq!(problem.source.name, "0");
    assert_eq!((problem.source.x, problem.source.y), (500, 500));
    assert_eq!(problem.source.block_name, "BUF_X1");

    assert_eq!(problem.sinks.len(), 4);
    assert_eq!(problem.sinks[3].name, "4");
    assert_eq!(problem.sinks[3].capacitance, 25.0);

    let tech = &problem.technology;
    assert_eq!(tech.wire_types.len(), 2);
    assert_eq!(tech.buffer_types.len(), 1);
    assert_eq!(tech.vdd, Some((1.0, 1.2)));
    assert_eq!(tech.capacitance_limit, Some(118000.0));
    assert_eq!(tech.skipped_lines, 0);

    assert_eq!(
        problem.blockages,
        vec![
            Rect::new(2000, 2000, 3000, 5000),
            Rect::new(6000, 5500, 8000, 6500)
        ]
    );
}

#[test]
fn test_read_missing_file() {
    let result = InputReader::new().read(data_path("does_not_exist.in"));
    assert!(matches!(result, Err(ViewerError::Io { .. })));
}

#[test]
fn test_example_problem_without_preamble() {
    let problem = parse_input(
        "0 0 100 100\nsource S1 10 10 BLK\nnum sink 2\nA 90 10 1\nB 50 90 1\nblockage list 0\n",
    )
    .unwrap();
    assert_eq!(problem.sinks.len(), 2);
    assert!(problem.blockages.is_empty());
}

#[test]
fn test_arbitrary_preamble_lines_are_skipped() {
    let problem = parse_input(
        "0 0 100 100\n\
         source S1 10 10 BLK\n\
         num sink 1\n\
         A 90 10 1\n\
         vendor specific line\n\
         another one with 7 tokens in it\n\
         num blockage 1\n\
         1 2 3 4\n",
    )
    .unwrap();
    assert_eq!(problem.technology.skipped_lines, 2);
    assert_eq!(problem.blockages, vec![Rect::new(1, 2, 3, 4)]);
}

#[test]
fn test_blank_lines_are_ignored() {
    let problem = parse_input(
        "\n0 0 100 100\n\nsource S1 10 10 BLK\nnum sink 1\n\nA 90 10 1\n\nnum blockage 0\n",
    )
    .unwrap();
    assert_eq!(problem.sinks.len(), 1);
}

#[test]
fn test_sink_block_one_line_short() {
    // declares 3 sinks, supplies 2, then the file ends
    let err = parse_input("0 0 100 100\nsource S1 10 10 BLK\nnum sink 3\nA 1 1 1\nB 2 2 1\n")
        .unwrap_err();
    assert_eq!(err.line, 6);
    assert!(matches!(err.kind, FormatErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_sink_block_one_line_short_before_blockages() {
    // the blockage header is consumed as the missing sink and fails to parse
    let err = parse_input(
        "0 0 100 100\nsource S1 10 10 BLK\nnum sink 3\nA 1 1 1\nB 2 2 1\nnum blockage 0\n",
    )
    .unwrap_err();
    assert_eq!(err.line, 6);
    assert_eq!(
        err.kind,
        FormatErrorKind::FieldCount {
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_sink_block_one_line_extra() {
    // the extra sink is left for the next block, where the preamble skips it
    let problem = parse_input(
        "0 0 100 100\nsource S1 10 10 BLK\nnum sink 1\nA 1 1 1\nB 2 2 1\nnum blockage 0\n",
    )
    .unwrap();
    assert_eq!(problem.sinks.len(), 1);
    assert_eq!(problem.technology.skipped_lines, 1);
}

#[test]
fn test_blockage_block_truncated() {
    let err = parse_input(
        "0 0 100 100\nsource S1 10 10 BLK\nnum sink 0\nnum blockage 2\n1 1 2 2\n",
    )
    .unwrap_err();
    assert_eq!(err.line, 6);
    assert!(matches!(err.kind, FormatErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_blockage_with_non_integer_corner() {
    let err = parse_input(
        "0 0 100 100\nsource S1 10 10 BLK\nnum sink 0\nnum blockage 1\n1 1 2.5 2\n",
    )
    .unwrap_err();
    assert_eq!(err.line, 5);
    assert_eq!(
        err.kind,
        FormatErrorKind::InvalidInteger {
            token: "2.5".to_string()
        }
    );
}

#[test]
fn test_sink_count_not_an_integer() {
    let err = parse_input("0 0 100 100\nsource S1 10 10 BLK\nnum sink many\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(matches!(err.kind, FormatErrorKind::InvalidInteger { .. }));
}

#[test]
fn test_empty_file() {
    let err = parse_input("").unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(err.kind, FormatErrorKind::UnexpectedEof { .. }));
}

#[test]
fn test_huge_sink_count_is_truncation() {
    let err = parse_input("0 0 100 100\nsource S1 10 10 BLK\nnum sink 1000000000000000000\nA 1 1 1\n")
        .unwrap_err();
    assert_eq!(err.line, 5);
    assert!(matches!(err.kind, FormatErrorKind::UnexpectedEof { .. }));
}
