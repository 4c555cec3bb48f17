// ABOUTME: The built-in layout catalog.
// ABOUTME: Ten hand-authored layouts, constructed once and shared read-only.

use std::sync::OnceLock;

use sp_core::{Direction, Layout, PaneOp};

/// The built-in layouts, in picker order. Constructed on first use and
/// immutable afterwards, so the slice can be shared freely across threads.
///
/// Step sequences use the same relative-focus vocabulary the synthesizer
/// emits, so each preset's split/focus counts line up with what synthesis
/// would produce for the matching grid (or its transpose, for the
/// row-oriented layouts).
pub fn presets() -> &'static [Layout] {
    static PRESETS: OnceLock<Vec<Layout>> = OnceLock::new();
    PRESETS.get_or_init(|| {
        vec![
            two_columns(),
            two_rows(),
            three_columns(),
            main_right_stack(),
            left_stack_main(),
            main_side_stack(),
            grid_2x2(),
            main_top_two_bottom(),
            two_top_one_bottom(),
            three_top_one_bottom(),
        ]
    })
}

fn preview(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn two_columns() -> Layout {
    Layout {
        id: "two-columns".to_string(),
        name: "Two Columns".to_string(),
        description: "Two equal vertical panes side by side".to_string(),
        preview: preview(&[
            "┌─────┬─────┐",
            "│  A  │  B  │",
            "│     │     │",
            "└─────┴─────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 2,
        final_focus: Direction::Previous,
    }
}

fn two_rows() -> Layout {
    Layout {
        id: "two-rows".to_string(),
        name: "Two Rows".to_string(),
        description: "Two equal horizontal panes stacked".to_string(),
        preview: preview(&[
            "┌───────────┐",
            "│     A     │",
            "├───────────┤",
            "│     B     │",
            "└───────────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 2,
        final_focus: Direction::Previous,
    }
}

fn three_columns() -> Layout {
    Layout {
        id: "three-columns".to_string(),
        name: "Three Columns".to_string(),
        description: "Three equal vertical panes in a row".to_string(),
        preview: preview(&[
            "┌───┬───┬───┐",
            "│ A │ B │ C │",
            "│   │   │   │",
            "└───┴───┴───┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn main_right_stack() -> Layout {
    Layout {
        id: "main-right-stack".to_string(),
        name: "Main + Right Stack".to_string(),
        description: "Large main pane with two stacked panes on the right".to_string(),
        preview: preview(&[
            "┌──────┬──────┐",
            "│      │  B   │",
            "│  A   ├──────┤",
            "│      │  C   │",
            "└──────┴──────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn left_stack_main() -> Layout {
    Layout {
        id: "left-stack-main".to_string(),
        name: "Left Stack + Main".to_string(),
        description: "Two stacked panes on the left with a large main pane".to_string(),
        preview: preview(&[
            "┌──────┬──────┐",
            "│  A   │      │",
            "├──────┤  B   │",
            "│  C   │      │",
            "└──────┴──────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn main_side_stack() -> Layout {
    Layout {
        id: "main-side-stack".to_string(),
        name: "Main + Side Stack".to_string(),
        description: "Wide main pane with a narrow side stack".to_string(),
        preview: preview(&[
            "┌──────┬─────┐",
            "│      │  B  │",
            "│  A   ├─────┤",
            "│      │  C  │",
            "└──────┴─────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn grid_2x2() -> Layout {
    Layout {
        id: "grid-2x2".to_string(),
        name: "Grid 2x2".to_string(),
        description: "Four equal panes in a 2x2 grid".to_string(),
        preview: preview(&[
            "┌─────┬─────┐",
            "│  A  │  B  │",
            "├─────┼─────┤",
            "│  C  │  D  │",
            "└─────┴─────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Right),
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 4,
        final_focus: Direction::Previous,
    }
}

fn main_top_two_bottom() -> Layout {
    Layout {
        id: "main-top-two-bottom".to_string(),
        name: "Main Top + Two Bottom".to_string(),
        description: "Wide main pane on top with two panes below".to_string(),
        preview: preview(&[
            "┌───────────┐",
            "│     A     │",
            "├─────┬─────┤",
            "│  B  │  C  │",
            "└─────┴─────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Down),
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn two_top_one_bottom() -> Layout {
    Layout {
        id: "two-top-one-bottom".to_string(),
        name: "Two Top + One Bottom".to_string(),
        description: "Two panes on top with a wide pane on the bottom".to_string(),
        preview: preview(&[
            "┌─────┬─────┐",
            "│  A  │  B  │",
            "├─────┴─────┤",
            "│     C     │",
            "└───────────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 3,
        final_focus: Direction::Previous,
    }
}

fn three_top_one_bottom() -> Layout {
    Layout {
        id: "three-top-one-bottom".to_string(),
        name: "Three Top + One Bottom".to_string(),
        description: "Three panes on top with a wide pane on the bottom".to_string(),
        preview: preview(&[
            "┌───┬───┬───┐",
            "│ A │ B │ C │",
            "├───┴───┴───┤",
            "│     D     │",
            "└───────────┘",
        ]),
        steps: vec![
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Previous),
            PaneOp::split(Direction::Right),
            PaneOp::split(Direction::Right),
            PaneOp::focus(Direction::Previous),
            PaneOp::focus(Direction::Previous),
            PaneOp::Equalize,
        ],
        pane_count: 4,
        final_focus: Direction::Previous,
    }
}
