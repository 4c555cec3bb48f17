// ABOUTME: Pane operation vocabulary shared by the planner and executors.
// ABOUTME: Serde tokens and executor key strings are a stable wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction argument for split and focus operations.
///
/// The lowercase serde tokens round-trip through persisted config files and
/// executor keybinding lookups; changing them is a breaking format change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    Previous,
    Next,
}

impl Direction {
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One atomic instruction in a layout plan, consumed strictly in list order
/// by an executor. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PaneOp {
    /// Bisect the currently focused pane.
    Split { direction: Direction },
    /// Move focus among existing panes.
    Focus { direction: Direction },
    /// Resize all panes to equal proportions.
    Equalize,
    /// Timing hint between steps; does not touch any pane.
    Delay { delay_ms: u64 },
}

impl PaneOp {
    pub fn split(direction: Direction) -> Self {
        PaneOp::Split { direction }
    }

    pub fn focus(direction: Direction) -> Self {
        PaneOp::Focus { direction }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, PaneOp::Split { .. })
    }

    pub fn is_focus(&self) -> bool {
        matches!(self, PaneOp::Focus { .. })
    }

    /// Keybinding lookup key an executor resolves this operation with.
    /// Delays are pure timing and have no key.
    pub fn executor_key(&self) -> Option<String> {
        match self {
            PaneOp::Split { direction } => Some(format!("new_split:{direction}")),
            PaneOp::Focus { direction } => Some(format!("goto_split:{direction}")),
            PaneOp::Equalize => Some("equalize_splits".to_string()),
            PaneOp::Delay { .. } => None,
        }
    }
}

impl fmt::Display for PaneOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneOp::Split { direction } => write!(f, "split {direction}"),
            PaneOp::Focus { direction } => write!(f, "focus {direction}"),
            PaneOp::Equalize => f.write_str("equalize splits"),
            PaneOp::Delay { delay_ms } => write!(f, "delay {delay_ms}ms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_tokens_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Previous).unwrap(),
            "\"previous\""
        );
        assert_eq!(serde_json::to_string(&Direction::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn op_wire_format_is_stable() {
        let split = PaneOp::split(Direction::Right);
        assert_eq!(
            serde_json::to_string(&split).unwrap(),
            r#"{"action":"split","direction":"right"}"#
        );

        let focus = PaneOp::focus(Direction::Previous);
        assert_eq!(
            serde_json::to_string(&focus).unwrap(),
            r#"{"action":"focus","direction":"previous"}"#
        );

        assert_eq!(
            serde_json::to_string(&PaneOp::Equalize).unwrap(),
            r#"{"action":"equalize"}"#
        );

        assert_eq!(
            serde_json::to_string(&PaneOp::Delay { delay_ms: 150 }).unwrap(),
            r#"{"action":"delay","delay_ms":150}"#
        );
    }

    #[test]
    fn op_round_trips() {
        let ops = vec![
            PaneOp::split(Direction::Down),
            PaneOp::focus(Direction::Up),
            PaneOp::Equalize,
            PaneOp::Delay { delay_ms: 50 },
        ];
        let json = serde_json::to_string(&ops).unwrap();
        let back: Vec<PaneOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ops);
    }

    #[test]
    fn executor_keys() {
        assert_eq!(
            PaneOp::split(Direction::Right).executor_key().as_deref(),
            Some("new_split:right")
        );
        assert_eq!(
            PaneOp::focus(Direction::Previous).executor_key().as_deref(),
            Some("goto_split:previous")
        );
        assert_eq!(
            PaneOp::Equalize.executor_key().as_deref(),
            Some("equalize_splits")
        );
        assert_eq!(PaneOp::Delay { delay_ms: 10 }.executor_key(), None);
    }

    #[test]
    fn display_reads_like_a_plan() {
        assert_eq!(PaneOp::split(Direction::Right).to_string(), "split right");
        assert_eq!(PaneOp::focus(Direction::Previous).to_string(), "focus previous");
        assert_eq!(PaneOp::Equalize.to_string(), "equalize splits");
        assert_eq!(PaneOp::Delay { delay_ms: 200 }.to_string(), "delay 200ms");
    }
}
