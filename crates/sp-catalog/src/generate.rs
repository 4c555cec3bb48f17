// ABOUTME: Assembles a Layout record from a name and grid spec.
// ABOUTME: Derives the slug, description, step plan, and preview.

use sp_core::{Direction, GridSpec, Layout};

/// Derive a lowercase, hyphen-separated identifier from a display name.
/// Runs of non-alphanumeric characters collapse to a single `-`; leading
/// and trailing dashes are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut prev_dash = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            prev_dash = false;
        } else if !prev_dash && !slug.is_empty() {
            slug.push('-');
            prev_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Human-readable summary of a grid's shape.
fn describe(spec: &GridSpec) -> String {
    let columns = spec.columns();
    let ncols = columns.len();
    let total = spec.pane_count();
    let all_same = columns.iter().all(|&rows| rows == columns[0]);

    if ncols == 1 && columns[0] == 1 {
        return "Single pane".to_string();
    }

    if all_same && columns[0] == 1 {
        return format!("{ncols} equal columns");
    }

    if ncols == 1 {
        return format!("{} rows in a single column", columns[0]);
    }

    if all_same {
        return format!("{}x{} grid with {} panes", ncols, columns[0], total);
    }

    let parts: Vec<String> = columns
        .iter()
        .map(|&rows| {
            if rows == 1 {
                "1 row".to_string()
            } else {
                format!("{rows} rows")
            }
        })
        .collect();
    format!("{} columns ({}), {} panes total", ncols, parts.join(", "), total)
}

/// Build a complete layout for `spec`: slug from `name`, derived
/// description, synthesized step plan, and rendered preview.
pub fn generate_layout(name: &str, spec: &GridSpec) -> Layout {
    Layout {
        id: slugify(name),
        name: name.to_string(),
        description: describe(spec),
        preview: sp_preview::render(spec),
        steps: sp_steps::synthesize(spec),
        pane_count: spec.pane_count(),
        final_focus: Direction::Previous,
    }
}
