// ABOUTME: Derives the split/focus operation sequence for a grid spec.
// ABOUTME: Plans against binary-split addressing with relative focus moves.

use sp_core::{Direction, GridSpec, PaneOp};

/// Compute the operation sequence that builds `spec` from a single pane.
///
/// Splitting always bisects the focused pane and moves focus onto the new
/// pane, so the plan works right to left: create all columns first, then
/// stack each column downward, using `focus previous` moves (spatial
/// reverse order) to step off a finished stack onto the column to its
/// left. A `[1]` spec produces only the trailing equalize.
pub fn synthesize(spec: &GridSpec) -> Vec<PaneOp> {
    let columns = spec.columns();
    let mut steps = Vec::new();

    // One split per additional column; focus ends on the rightmost pane.
    for _ in 1..columns.len() {
        steps.push(PaneOp::split(Direction::Right));
    }

    // Build each column's stack, last column first. After the downward
    // splits focus sits on the stack's bottom pane; `rows` previous-moves
    // clear the whole stack and land on the next column to the left,
    // which is still a single pane.
    for (idx, &rows) in columns.iter().enumerate().rev() {
        for _ in 1..rows {
            steps.push(PaneOp::split(Direction::Down));
        }
        if idx > 0 {
            for _ in 0..rows {
                steps.push(PaneOp::focus(Direction::Previous));
            }
        }
    }

    // The first column gets no compensation above; settle on its top pane.
    for _ in 1..columns[0] {
        steps.push(PaneOp::focus(Direction::Previous));
    }

    steps.push(PaneOp::Equalize);
    steps
}
