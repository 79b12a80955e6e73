// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use proptest::prelude::*;
use ted_buffer::document::Document;
use ted_buffer::wrap::{CursorCommand, WrapEngine, rows_for_line};

fn line_of(len: usize) -> Document {
    let bytes = vec![b'x'; len];
    Document::from_bytes(&bytes).expect("allocation in test")
}

proptest! {
    /// Right-then-left restores the identical logical position for any
    /// line length and any in-range starting column.
    #[test]
    fn right_then_left_round_trips(
        len in 1usize..200,
        width in 1usize..40,
        start_frac in 0.0f64..1.0,
    ) {
        let doc = line_of(len);
        let mut engine = WrapEngine::new(&doc, width);

        // Walk to the starting column, strictly left of the end so a
        // right move applies.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let start = ((len as f64) * start_frac) as usize % len;
        for _ in 0..start {
            engine.move_right(&doc);
        }
        prop_assert_eq!(engine.column(), start);

        engine.move_right(&doc);
        engine.move_left(&doc);

        prop_assert_eq!(engine.line(), 0);
        prop_assert_eq!(engine.column(), start);
    }

    /// Exact multiples of the width occupy exactly k rows, never k + 1.
    #[test]
    fn exact_multiple_row_count(k in 1usize..50, width in 1usize..60) {
        prop_assert_eq!(rows_for_line(k * width, width), k);
    }

    /// The physical mapping is always internally consistent: offset is
    /// the column modulo width and stays inside the wrap segment.
    #[test]
    fn physical_position_is_consistent(
        len in 0usize..200,
        width in 1usize..40,
        steps in 0usize..250,
    ) {
        let doc = line_of(len);
        let mut engine = WrapEngine::new(&doc, width);
        for _ in 0..steps {
            engine.move_right(&doc);
        }

        let pos = engine.physical(&doc);
        prop_assert!(engine.column() <= len);
        prop_assert_eq!(pos.offset, engine.column() % width);
        prop_assert_eq!(pos.row, engine.column() / width);
        prop_assert!(pos.offset < width);
    }

    /// Vertical moves carry the glyph the exact physical distance: the net
    /// row steps equal the change in the physical row and the net column
    /// steps equal the change in the wrap offset, for any pair of line
    /// lengths and any starting column.
    #[test]
    fn vertical_move_commands_match_physical_delta(
        first in 0usize..60,
        second in 0usize..60,
        width in 1usize..20,
        start in 0usize..60,
    ) {
        let mut bytes = vec![b'x'; first];
        bytes.push(b'\n');
        bytes.extend(vec![b'x'; second]);
        let doc = Document::from_bytes(&bytes).expect("allocation in test");
        let mut engine = WrapEngine::new(&doc, width);
        for _ in 0..start.min(first) {
            engine.move_right(&doc);
        }

        let before = engine.physical(&doc);
        let commands = engine.move_down(&doc);
        let after = engine.physical(&doc);

        let downs = commands.iter().filter(|c| **c == CursorCommand::Down).count();
        let ups = commands.iter().filter(|c| **c == CursorCommand::Up).count();
        let rights = commands.iter().filter(|c| **c == CursorCommand::Right).count();
        let lefts = commands.iter().filter(|c| **c == CursorCommand::Left).count();

        prop_assert_eq!(after.row + ups, before.row + downs);
        prop_assert_eq!(after.offset + lefts, before.offset + rights);
    }

    /// Appending bytes one at a time keeps the incremental row total equal
    /// to a from-scratch recount.
    #[test]
    fn incremental_row_total_matches_recount(
        appends in 0usize..120,
        width in 1usize..30,
    ) {
        let mut doc = Document::new();
        let mut engine = WrapEngine::new(&doc, width);

        for n in 0..appends {
            doc.insert_char(0, n, b'a').expect("allocation in test");
            engine.advance_after_insert(n, n + 1);
        }

        prop_assert_eq!(engine.physical_rows(), rows_for_line(appends, width));
    }
}
