// ABOUTME: Layout record combining preview, step plan, and metadata.
// ABOUTME: Constructed once by the catalog or generator, read-only after.

use serde::{Deserialize, Serialize};

use crate::op::{Direction, PaneOp};

/// A complete, executable pane arrangement.
///
/// Built either by the preset catalog or by the layout generator, then
/// never mutated. Persisted verbatim in the user's config file for custom
/// layouts, so field names and step tokens are part of the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Unique, URL/file-safe slug.
    pub id: String,
    pub name: String,
    pub description: String,
    pub pane_count: usize,
    /// Focus direction the executor should end on.
    pub final_focus: Direction,
    /// Box-drawing diagram, one string per line, equal display width.
    pub preview: Vec<String>,
    /// Operations an executor runs in order to build the arrangement.
    pub steps: Vec<PaneOp>,
}

impl Layout {
    /// Number of split operations in the plan. Every pane beyond the
    /// first costs exactly one split.
    pub fn split_count(&self) -> usize {
        self.steps.iter().filter(|op| op.is_split()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        Layout {
            id: "two-columns".to_string(),
            name: "Two Columns".to_string(),
            description: "Two equal vertical panes side by side".to_string(),
            preview: vec!["┌┬┐".to_string(), "└┴┘".to_string()],
            steps: vec![
                PaneOp::split(Direction::Right),
                PaneOp::focus(Direction::Previous),
                PaneOp::Equalize,
            ],
            pane_count: 2,
            final_focus: Direction::Previous,
        }
    }

    #[test]
    fn split_count_counts_only_splits() {
        assert_eq!(sample().split_count(), 1);
    }

    #[test]
    fn serializes_with_stable_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "two-columns");
        assert_eq!(json["pane_count"], 2);
        assert_eq!(json["final_focus"], "previous");
        assert_eq!(json["steps"][0]["action"], "split");
        assert_eq!(json["steps"][0]["direction"], "right");
    }
}
