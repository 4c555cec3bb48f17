// ABOUTME: Binary tree model of executor pane semantics.
// ABOUTME: Splits bisect the focused pane; focus moves in spatial order.

use std::collections::HashMap;

use sp_core::{Direction, PaneOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub u64);

/// Split orientation: `Horizontal` places panes side by side,
/// `Vertical` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug)]
enum Node {
    Pane(PaneId),
    Split {
        axis: Axis,
        ratio: f32,
        first: Box<Node>,
        second: Box<Node>,
    },
}

/// Reference model of a binary-split pane tree.
///
/// Mirrors the addressing model of split-pane terminals: new panes are
/// created only by bisecting the currently focused pane, and navigation is
/// relative. `previous`/`next` walk the leaves in spatial order (left to
/// right, top to bottom within a column) and wrap around. Directional focus
/// moves are not modeled; synthesized plans never use them.
#[derive(Debug)]
pub struct PaneTree {
    root: Node,
    focused: PaneId,
    next_id: u64,
}

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl PaneTree {
    pub fn new() -> Self {
        let id = PaneId(0);
        Self {
            root: Node::Pane(id),
            focused: id,
            next_id: 1,
        }
    }

    pub fn focused_pane(&self) -> PaneId {
        self.focused
    }

    /// Bisect the focused pane, moving focus to the new pane.
    /// `Right`/`Down` place the new pane after the old one, `Left`/`Up`
    /// before it. Relative directions are not split directions.
    pub fn split(&mut self, direction: Direction) -> Option<PaneId> {
        let (axis, new_first) = match direction {
            Direction::Right => (Axis::Horizontal, false),
            Direction::Left => (Axis::Horizontal, true),
            Direction::Down => (Axis::Vertical, false),
            Direction::Up => (Axis::Vertical, true),
            Direction::Previous | Direction::Next => return None,
        };

        let new_id = PaneId(self.next_id);
        self.next_id += 1;

        if split_node(&mut self.root, self.focused, axis, new_first, new_id) {
            self.focused = new_id;
            Some(new_id)
        } else {
            None
        }
    }

    /// Move focus to the previous pane in spatial order, wrapping around.
    pub fn focus_previous(&mut self) -> PaneId {
        self.focus_offset(-1)
    }

    /// Move focus to the next pane in spatial order, wrapping around.
    pub fn focus_next(&mut self) -> PaneId {
        self.focus_offset(1)
    }

    fn focus_offset(&mut self, offset: isize) -> PaneId {
        let panes = self.panes();
        let idx = panes
            .iter()
            .position(|&p| p == self.focused)
            .unwrap_or(0) as isize;
        let len = panes.len() as isize;
        let next = (idx + offset).rem_euclid(len) as usize;
        self.focused = panes[next];
        self.focused
    }

    /// Resize every split so that sibling subtrees get space proportional
    /// to how many panes they tile along the split axis. Uniform grids end
    /// up with equal-area panes.
    pub fn equalize(&mut self) {
        equalize_node(&mut self.root);
    }

    /// Run one plan operation. Returns false for operations this model
    /// does not support (directional focus moves).
    pub fn apply(&mut self, op: &PaneOp) -> bool {
        match op {
            PaneOp::Split { direction } => self.split(*direction).is_some(),
            PaneOp::Focus { direction } => match direction {
                Direction::Previous => {
                    self.focus_previous();
                    true
                }
                Direction::Next => {
                    self.focus_next();
                    true
                }
                _ => false,
            },
            PaneOp::Equalize => {
                self.equalize();
                true
            }
            PaneOp::Delay { .. } => true,
        }
    }

    /// Run a whole plan. Returns false if any operation was unsupported.
    pub fn apply_all(&mut self, ops: &[PaneOp]) -> bool {
        ops.iter().all(|op| self.apply(op))
    }

    /// All pane IDs in spatial order.
    pub fn panes(&self) -> Vec<PaneId> {
        let mut result = Vec::new();
        collect_panes(&self.root, &mut result);
        result
    }

    /// Get all panes with their layout rectangles
    pub fn pane_rects(&self) -> HashMap<PaneId, Rect> {
        let mut result = HashMap::new();
        collect_rects(&self.root, Rect::full(), &mut result);
        result
    }

    /// Per-column pane counts if the tree tiles as vertical stacks placed
    /// side by side; `None` for any other shape.
    pub fn column_shape(&self) -> Option<Vec<usize>> {
        let mut shape = Vec::new();
        if collect_strips(&self.root, Axis::Horizontal, &mut shape) {
            Some(shape)
        } else {
            None
        }
    }

    /// Per-row pane counts if the tree tiles as horizontal strips stacked
    /// top to bottom; `None` for any other shape.
    pub fn row_shape(&self) -> Option<Vec<usize>> {
        let mut shape = Vec::new();
        if collect_strips(&self.root, Axis::Vertical, &mut shape) {
            Some(shape)
        } else {
            None
        }
    }
}

fn split_node(node: &mut Node, target: PaneId, axis: Axis, new_first: bool, new_id: PaneId) -> bool {
    match node {
        Node::Pane(id) if *id == target => {
            let old_pane = Node::Pane(*id);
            let new_pane = Node::Pane(new_id);
            let (first, second) = if new_first {
                (new_pane, old_pane)
            } else {
                (old_pane, new_pane)
            };
            *node = Node::Split {
                axis,
                ratio: 0.5,
                first: Box::new(first),
                second: Box::new(second),
            };
            true
        }
        Node::Pane(_) => false,
        Node::Split { first, second, .. } => {
            split_node(first, target, axis, new_first, new_id)
                || split_node(second, target, axis, new_first, new_id)
        }
    }
}

fn collect_panes(node: &Node, out: &mut Vec<PaneId>) {
    match node {
        Node::Pane(id) => out.push(*id),
        Node::Split { first, second, .. } => {
            collect_panes(first, out);
            collect_panes(second, out);
        }
    }
}

fn collect_rects(node: &Node, rect: Rect, out: &mut HashMap<PaneId, Rect>) {
    match node {
        Node::Pane(id) => {
            out.insert(*id, rect);
        }
        Node::Split {
            axis,
            ratio,
            first,
            second,
        } => {
            let (first_rect, second_rect) = match axis {
                Axis::Horizontal => (
                    Rect {
                        x: rect.x,
                        y: rect.y,
                        width: rect.width * ratio,
                        height: rect.height,
                    },
                    Rect {
                        x: rect.x + rect.width * ratio,
                        y: rect.y,
                        width: rect.width * (1.0 - ratio),
                        height: rect.height,
                    },
                ),
                Axis::Vertical => (
                    Rect {
                        x: rect.x,
                        y: rect.y,
                        width: rect.width,
                        height: rect.height * ratio,
                    },
                    Rect {
                        x: rect.x,
                        y: rect.y + rect.height * ratio,
                        width: rect.width,
                        height: rect.height * (1.0 - ratio),
                    },
                ),
            };
            collect_rects(first, first_rect, out);
            collect_rects(second, second_rect, out);
        }
    }
}

/// Number of panes the subtree tiles along `axis`.
fn span(node: &Node, axis: Axis) -> usize {
    match node {
        Node::Pane(_) => 1,
        Node::Split {
            axis: split_axis,
            first,
            second,
            ..
        } => {
            if *split_axis == axis {
                span(first, axis) + span(second, axis)
            } else {
                span(first, axis).max(span(second, axis))
            }
        }
    }
}

fn equalize_node(node: &mut Node) {
    if let Node::Split {
        axis,
        ratio,
        first,
        second,
    } = node
    {
        let first_span = span(first, *axis) as f32;
        let second_span = span(second, *axis) as f32;
        *ratio = first_span / (first_span + second_span);
        equalize_node(first);
        equalize_node(second);
    }
}

/// Pane count of a subtree that is a pure run of splits along `axis`
/// (a single column or row); `None` if any cross-axis split appears.
fn strip_len(node: &Node, cross: Axis) -> Option<usize> {
    match node {
        Node::Pane(_) => Some(1),
        Node::Split { axis, .. } if *axis == cross => None,
        Node::Split { first, second, .. } => {
            Some(strip_len(first, cross)? + strip_len(second, cross)?)
        }
    }
}

fn collect_strips(node: &Node, along: Axis, out: &mut Vec<usize>) -> bool {
    match node {
        Node::Split {
            axis,
            first,
            second,
            ..
        } if *axis == along => {
            collect_strips(first, along, out) && collect_strips(second, along, out)
        }
        other => match strip_len(other, along) {
            Some(len) => {
                out.push(len);
                true
            }
            None => false,
        },
    }
}

impl Default for PaneTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_one_pane() {
        let tree = PaneTree::new();
        assert_eq!(tree.panes().len(), 1);
    }

    #[test]
    fn split_creates_two_panes_and_focuses_new() {
        let mut tree = PaneTree::new();
        let first = tree.focused_pane();
        let second = tree.split(Direction::Right).unwrap();

        let panes = tree.panes();
        assert_eq!(panes, vec![first, second]);
        assert_eq!(tree.focused_pane(), second);
    }

    #[test]
    fn split_gives_equal_space() {
        let mut tree = PaneTree::new();
        let first = tree.focused_pane();
        let second = tree.split(Direction::Right).unwrap();

        let rects = tree.pane_rects();
        let first_rect = rects.get(&first).unwrap();
        let second_rect = rects.get(&second).unwrap();

        assert!((first_rect.width - 0.5).abs() < 0.001);
        assert!((second_rect.width - 0.5).abs() < 0.001);
        assert!(second_rect.x > first_rect.x);
    }

    #[test]
    fn split_left_places_new_pane_first() {
        let mut tree = PaneTree::new();
        let original = tree.focused_pane();
        let new = tree.split(Direction::Left).unwrap();

        assert_eq!(tree.panes(), vec![new, original]);
    }

    #[test]
    fn relative_directions_are_not_split_directions() {
        let mut tree = PaneTree::new();
        assert!(tree.split(Direction::Previous).is_none());
        assert_eq!(tree.panes().len(), 1);
    }

    #[test]
    fn focus_previous_walks_spatial_order_and_wraps() {
        let mut tree = PaneTree::new();
        let a = tree.focused_pane();
        let b = tree.split(Direction::Right).unwrap();
        let c = tree.split(Direction::Down).unwrap();

        // Spatial order: a, b (right top), c (right bottom)
        assert_eq!(tree.panes(), vec![a, b, c]);

        assert_eq!(tree.focus_previous(), b);
        assert_eq!(tree.focus_previous(), a);
        assert_eq!(tree.focus_previous(), c); // wraps
        assert_eq!(tree.focus_next(), a);
    }

    #[test]
    fn directional_focus_is_unsupported() {
        let mut tree = PaneTree::new();
        tree.split(Direction::Right).unwrap();
        assert!(!tree.apply(&PaneOp::focus(Direction::Left)));
        assert!(tree.apply(&PaneOp::focus(Direction::Previous)));
    }

    #[test]
    fn column_shape_recovers_grid() {
        let mut tree = PaneTree::new();
        // Build [2, 2]: split right, stack the right column, walk back,
        // stack the left column.
        tree.split(Direction::Right).unwrap();
        tree.split(Direction::Down).unwrap();
        tree.focus_previous();
        tree.focus_previous();
        tree.split(Direction::Down).unwrap();

        assert_eq!(tree.column_shape(), Some(vec![2, 2]));
        assert_eq!(tree.row_shape(), None);
    }

    #[test]
    fn row_shape_recovers_transposed_grid() {
        let mut tree = PaneTree::new();
        // Top pane over a bottom row of two.
        tree.split(Direction::Down).unwrap();
        tree.split(Direction::Right).unwrap();

        assert_eq!(tree.row_shape(), Some(vec![1, 2]));
        assert_eq!(tree.column_shape(), None);
    }

    #[test]
    fn single_pane_shape() {
        let tree = PaneTree::new();
        assert_eq!(tree.column_shape(), Some(vec![1]));
        assert_eq!(tree.row_shape(), Some(vec![1]));
    }

    #[test]
    fn equalize_makes_uniform_grid_equal_area() {
        let mut tree = PaneTree::new();
        // Three columns: the naive ratios would give 1/2, 1/4, 1/4.
        tree.split(Direction::Right).unwrap();
        tree.split(Direction::Right).unwrap();
        tree.equalize();

        for rect in tree.pane_rects().values() {
            assert!((rect.width - 1.0 / 3.0).abs() < 0.001);
            assert!((rect.height - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn equalize_keeps_uneven_columns_equal_width() {
        let mut tree = PaneTree::new();
        // [2, 1]: left column stacked, right column single.
        tree.split(Direction::Right).unwrap();
        tree.focus_previous();
        tree.split(Direction::Down).unwrap();
        tree.equalize();

        for rect in tree.pane_rects().values() {
            assert!((rect.width - 0.5).abs() < 0.001);
        }
    }
}
