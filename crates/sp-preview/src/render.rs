// ABOUTME: Renders a grid spec as a box-drawing character diagram.
// ABOUTME: Handles uneven columns, junction glyph choice, and label placement.

use sp_core::GridSpec;

/// Draw `spec` as a box-drawing diagram with one letter label per pane.
///
/// The diagram is sized to a fixed character budget: 15 columns wide for up
/// to three columns (4·n+1 beyond that) and at most 7 lines tall, so
/// previews stay compact in a picker card. Columns with fewer rows than the
/// tallest column get their own evenly spaced dividers; interior dividers
/// do not need to align across columns.
pub fn render(spec: &GridSpec) -> Vec<String> {
    let columns = spec.columns();
    let ncols = columns.len();
    let max_rows = spec.max_rows();

    let target_width = if ncols <= 3 { 15 } else { ncols * 4 + 1 };
    let inner_width = target_width - (ncols + 1);
    let col_widths = distribute(inner_width, ncols);

    // Two character rows per pane row, capped so tall grids stay short.
    let grid_height = (max_rows * 2).clamp(2, 6);
    let row_heights = distribute(grid_height, max_rows);

    let boundaries: Vec<Vec<usize>> = columns
        .iter()
        .map(|&rows| row_boundaries(&row_heights, rows))
        .collect();

    // Labels run column-major, top to bottom.
    let mut next_label = b'A';
    let labels: Vec<Vec<char>> = columns
        .iter()
        .map(|&rows| {
            (0..rows)
                .map(|_| {
                    let label = next_label as char;
                    next_label += 1;
                    label
                })
                .collect()
        })
        .collect();

    let mut lines = Vec::with_capacity(grid_height + 1);
    for line_idx in 0..=grid_height {
        let is_top = line_idx == 0;
        let is_bottom = line_idx == grid_height;
        let mut line = String::new();

        for c in 0..ncols {
            let on_boundary = boundaries[c].contains(&line_idx);

            if c == 0 {
                line.push(if is_top {
                    '┌'
                } else if is_bottom {
                    '└'
                } else if on_boundary {
                    '├'
                } else {
                    '│'
                });
            }

            if is_top || is_bottom || on_boundary {
                for _ in 0..col_widths[c] {
                    line.push('─');
                }
            } else {
                let label = label_at(line_idx, &boundaries[c], &labels[c]);
                line.push_str(&center_pad(label, col_widths[c]));
            }

            if c + 1 < ncols {
                // Junction at the shared seam depends on which side also
                // has a divider ending at this line.
                let left = on_boundary || is_top || is_bottom;
                let right =
                    boundaries[c + 1].contains(&line_idx) || is_top || is_bottom;
                line.push(if is_top {
                    '┬'
                } else if is_bottom {
                    '┴'
                } else if left && right {
                    '┼'
                } else if left {
                    '┤'
                } else if right {
                    '├'
                } else {
                    '│'
                });
            } else {
                line.push(if is_top {
                    '┐'
                } else if is_bottom {
                    '┘'
                } else if on_boundary {
                    '┤'
                } else {
                    '│'
                });
            }
        }

        lines.push(line);
    }

    lines
}

/// Split `total` units into `parts` as evenly as possible; the first
/// `total % parts` parts get the extra unit. The result always sums to
/// `total` and no two parts differ by more than one.
fn distribute(total: usize, parts: usize) -> Vec<usize> {
    let base = total / parts;
    let remainder = total % parts;
    (0..parts)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Line indices of a column's horizontal edges: top border, interior
/// dividers, bottom border. Strictly increasing, from 0 to the full grid
/// height.
fn row_boundaries(row_heights: &[usize], col_rows: usize) -> Vec<usize> {
    let total: usize = row_heights.iter().sum();

    if col_rows == 1 {
        return vec![0, total];
    }

    // A full-height column follows the shared row grid; a shorter one
    // respaces the same total height across its own rows.
    let heights = if col_rows == row_heights.len() {
        row_heights.to_vec()
    } else {
        distribute(total, col_rows)
    };

    let mut boundaries = Vec::with_capacity(heights.len() + 1);
    boundaries.push(0);
    let mut pos = 0;
    for h in heights {
        pos += h;
        boundaries.push(pos);
    }
    boundaries
}

/// The pane label to show on this interior line, if any. Cells taller than
/// two lines center the label; two-line cells put it right under the top
/// border.
fn label_at(line_idx: usize, boundaries: &[usize], labels: &[char]) -> Option<char> {
    for (pane, edges) in boundaries.windows(2).enumerate() {
        let (top, bottom) = (edges[0], edges[1]);
        if line_idx > top && line_idx < bottom {
            let label_line = if bottom - top > 2 {
                (top + bottom) / 2
            } else {
                top + 1
            };
            if line_idx == label_line {
                return labels.get(pane).copied();
            }
            return None;
        }
    }
    None
}

fn center_pad(label: Option<char>, width: usize) -> String {
    let text = match label {
        Some(c) => c.to_string(),
        None => String::new(),
    };
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
