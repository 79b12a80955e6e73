// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ted_buffer::document::Document;
use ted_buffer::wrap::{CursorCommand, WrapEngine, rows_for_line};

fn engine_for(bytes: &[u8], width: usize) -> (Document, WrapEngine) {
    let doc = Document::from_bytes(bytes).unwrap();
    let engine = WrapEngine::new(&doc, width);
    (doc, engine)
}

/// Step the cursor right `n` times, ignoring the emitted commands.
fn step_right(engine: &mut WrapEngine, doc: &Document, n: usize) {
    for _ in 0..n {
        engine.move_right(doc);
    }
}

// ------------------------
// Row counting
// ------------------------

#[test]
fn empty_line_occupies_one_row() {
    assert_eq!(rows_for_line(0, 10), 1);
}

#[test]
fn exact_multiples_never_round_up() {
    // The classic off-by-one: a line of exactly k*W bytes is k rows.
    assert_eq!(rows_for_line(10, 10), 1);
    assert_eq!(rows_for_line(20, 10), 2);
    assert_eq!(rows_for_line(30, 10), 3);
}

#[test]
fn one_past_a_multiple_adds_a_row() {
    assert_eq!(rows_for_line(11, 10), 2);
    assert_eq!(rows_for_line(21, 10), 3);
}

#[test]
fn engine_sums_rows_across_lines() {
    // 11 bytes wraps to 2 rows, empty line is 1, 3 bytes is 1.
    let (_, engine) = engine_for(b"0123456789X\n\nabc", 10);
    assert_eq!(engine.physical_rows(), 4);
}

// ------------------------
// Boundary crossing: width 10, line "0123456789X"
// ------------------------

#[test_log::test]
fn cursor_at_column_ten_sits_on_second_row() {
    let (doc, mut engine) = engine_for(b"0123456789X", 10);
    step_right(&mut engine, &doc, 10);

    assert_eq!(engine.column(), 10);
    let pos = engine.physical(&doc);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.offset, 0);
}

#[test_log::test]
fn left_from_wrap_boundary_returns_to_same_line() {
    let (doc, mut engine) = engine_for(b"0123456789X", 10);
    step_right(&mut engine, &doc, 10);

    let commands = engine.move_left(&doc);

    assert_eq!(engine.line(), 0);
    assert_eq!(engine.column(), 9);
    let pos = engine.physical(&doc);
    assert_eq!(pos.row, 0);
    assert_eq!(pos.offset, 9);

    // One row up, then a full-width run right; the terminal clamps at
    // its last column.
    assert_eq!(commands[0], CursorCommand::Up);
    assert_eq!(commands.len(), 11);
    assert!(commands[1..].iter().all(|c| *c == CursorCommand::Right));
}

#[test_log::test]
fn right_across_wrap_boundary_descends_and_rewinds() {
    let (doc, mut engine) = engine_for(b"0123456789X", 10);
    step_right(&mut engine, &doc, 9);

    let commands = engine.move_right(&doc);

    assert_eq!(engine.column(), 10);
    assert_eq!(commands[0], CursorCommand::Down);
    // ((9 + 1) / 10) * 10 lefts, clamped by the terminal at column 0.
    assert_eq!(commands.len(), 11);
    assert!(commands[1..].iter().all(|c| *c == CursorCommand::Left));
}

// ------------------------
// Edges
// ------------------------

#[test]
fn left_at_column_zero_is_a_no_op() {
    let (doc, mut engine) = engine_for(b"abc", 10);
    assert!(engine.move_left(&doc).is_empty());
    assert_eq!(engine.column(), 0);
}

#[test]
fn right_at_end_of_line_is_a_no_op() {
    let (doc, mut engine) = engine_for(b"ab", 10);
    step_right(&mut engine, &doc, 2);

    assert!(engine.move_right(&doc).is_empty());
    assert_eq!(engine.column(), 2);
}

#[test]
fn up_on_first_line_is_a_no_op() {
    let (doc, mut engine) = engine_for(b"abc\ndef", 10);
    assert!(engine.move_up(&doc).is_empty());
    assert_eq!(engine.line(), 0);
}

#[test]
fn down_on_last_line_is_a_no_op() {
    let (doc, mut engine) = engine_for(b"abc\ndef", 10);
    engine.move_down(&doc);
    assert!(engine.move_down(&doc).is_empty());
    assert_eq!(engine.line(), 1);
}

#[test]
fn end_of_line_is_distinct_from_last_cell() {
    let (doc, mut engine) = engine_for(b"abc", 10);
    step_right(&mut engine, &doc, 3);

    // Resting one past the final byte is valid.
    assert_eq!(engine.column(), doc.line(0).len());
    let pos = engine.physical(&doc);
    assert_eq!(pos.offset, 3);
}

// ------------------------
// Vertical clamp-by-stepping
// ------------------------

#[test]
fn down_clamps_column_one_step_at_a_time() {
    let (doc, mut engine) = engine_for(b"abcdef\nab", 10);
    step_right(&mut engine, &doc, 5);

    let commands = engine.move_down(&doc);

    assert_eq!(engine.line(), 1);
    assert_eq!(engine.column(), 2);
    assert_eq!(
        commands,
        vec![
            CursorCommand::Down,
            CursorCommand::Left,
            CursorCommand::Left,
            CursorCommand::Left,
        ]
    );
}

#[test]
fn down_across_a_wrapped_line_emits_one_step_per_row() {
    let (doc, mut engine) = engine_for(b"0123456789X\nab", 10);

    let before = engine.physical(&doc).row;
    let commands = engine.move_down(&doc);
    let after = engine.physical(&doc).row;

    // Line 0 spans two physical rows; a single down step would leave the
    // glyph on its "X" segment while the model sits on "ab".
    assert_eq!(engine.line(), 1);
    assert_eq!(after - before, 2);
    assert_eq!(commands, vec![CursorCommand::Down, CursorCommand::Down]);
}

#[test]
fn up_across_a_wrapped_line_emits_one_step_per_row() {
    let (doc, mut engine) = engine_for(b"0123456789X\nab", 10);
    engine.move_down(&doc);

    let commands = engine.move_up(&doc);

    assert_eq!(engine.line(), 0);
    assert_eq!(commands, vec![CursorCommand::Up, CursorCommand::Up]);
}

#[test]
fn up_keeps_column_when_it_fits() {
    let (doc, mut engine) = engine_for(b"abcdef\nxy", 10);
    engine.move_down(&doc);
    step_right(&mut engine, &doc, 2);

    let commands = engine.move_up(&doc);

    assert_eq!(engine.line(), 0);
    assert_eq!(engine.column(), 2);
    assert_eq!(commands, vec![CursorCommand::Up]);
}

// ------------------------
// Incremental row accounting
// ------------------------

#[test]
fn append_across_wrap_boundary_grows_row_total() {
    let (mut doc, mut engine) = engine_for(b"0123456789", 10);
    step_right(&mut engine, &doc, 10);
    assert_eq!(engine.physical_rows(), 1);

    doc.insert_char(0, 10, b'X').unwrap();
    let crossed = engine.advance_after_insert(10, 11);

    assert!(crossed);
    assert_eq!(engine.physical_rows(), 2);
    assert_eq!(engine.column(), 11);
}

#[test]
fn append_within_a_row_keeps_the_total() {
    let (mut doc, mut engine) = engine_for(b"abc", 10);
    step_right(&mut engine, &doc, 3);

    doc.insert_char(0, 3, b'd').unwrap();
    let crossed = engine.advance_after_insert(3, 4);

    assert!(!crossed);
    assert_eq!(engine.physical_rows(), 1);
}

#[test]
fn overwrite_never_changes_the_total() {
    let (mut doc, mut engine) = engine_for(b"abcd", 10);
    step_right(&mut engine, &doc, 1);

    doc.insert_char(0, 1, b'X').unwrap();
    let crossed = engine.advance_after_insert(4, 4);

    assert!(!crossed);
    assert_eq!(engine.physical_rows(), 1);
    assert_eq!(engine.column(), 2);
}

#[test]
fn split_adds_one_row_and_homes_the_column() {
    let (mut doc, mut engine) = engine_for(b"abc\nxyz", 10);
    step_right(&mut engine, &doc, 3);

    doc.split_line(engine.line());
    engine.advance_after_split();

    assert_eq!(engine.line(), 1);
    assert_eq!(engine.column(), 0);
    assert_eq!(engine.physical_rows(), 3);
}

// ------------------------
// Physical mapping across lines
// ------------------------

#[test]
fn rows_before_accounts_for_wrapped_lines() {
    let (doc, engine) = engine_for(b"0123456789X\nab\ncd", 10);
    assert_eq!(engine.rows_before(&doc, 0), 0);
    assert_eq!(engine.rows_before(&doc, 1), 2);
    assert_eq!(engine.rows_before(&doc, 2), 3);
}

#[test]
fn physical_row_includes_lines_above() {
    let (doc, mut engine) = engine_for(b"0123456789X\nab", 10);
    engine.move_down(&doc);
    step_right(&mut engine, &doc, 1);

    let pos = engine.physical(&doc);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.offset, 1);
}
