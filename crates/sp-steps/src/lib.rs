// ABOUTME: Step sequence synthesis for binary-split pane layouts.
// ABOUTME: Includes a pane tree simulator used to verify emitted plans.

mod synth;
pub mod tree;

pub use synth::synthesize;
pub use tree::{PaneId, PaneTree, Rect};
