// ABOUTME: Command line entry point for splitplan.
// ABOUTME: Lists, previews, and manages layouts; execution is external.

use anyhow::{bail, Context, Result};

use sp_catalog::{catalog, find, generate_layout};
use sp_core::{Config, GridSpec};

/// Caller-side bounds on grid specs; the core types accept anything
/// non-empty and positive.
const MAX_COLUMNS: usize = 6;
const MAX_ROWS: usize = 6;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("list") => {
            let all = args.iter().any(|a| a == "--all" || a == "-a");
            list_layouts(all)
        }
        Some("show") => {
            let id = args.get(1).context("usage: splitplan show <layout-id>")?;
            show_layout(id)
        }
        Some("add") => add_layout(&args[1..]),
        Some("hide") => {
            let id = args.get(1).context("usage: splitplan hide <layout-id>")?;
            hide_layout(id)
        }
        Some("unhide") => {
            let id = args.get(1).context("usage: splitplan unhide <layout-id>")?;
            unhide_layout(id)
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => bail!("unknown command '{other}' — try 'splitplan help'"),
    }
}

fn print_usage() {
    println!("splitplan — plan terminal pane layouts");
    println!();
    println!("Usage:");
    println!("  splitplan list [--all]            List layouts (including hidden with --all)");
    println!("  splitplan show <layout-id>        Print a layout's preview and step plan");
    println!("  splitplan add <name> <rows>...    Save a custom layout (one row count per column)");
    println!("  splitplan hide <layout-id>        Hide a layout from the picker");
    println!("  splitplan unhide <layout-id>      Unhide a layout");
}

fn list_layouts(show_all: bool) -> Result<()> {
    let config = Config::load_or_default();

    for layout in catalog(&config) {
        let mut hidden = "";
        if config.is_hidden(&layout.id) {
            if !show_all {
                continue;
            }
            hidden = " (hidden)";
        }
        println!(
            "  {:<20} {} ({} panes){}",
            layout.id, layout.name, layout.pane_count, hidden
        );
    }
    Ok(())
}

fn show_layout(id: &str) -> Result<()> {
    let config = Config::load_or_default();
    let layout = find(&config, id).with_context(|| {
        format!("layout '{id}' not found — run 'splitplan list --all' to see all layouts")
    })?;

    println!("{} — {}", layout.name, layout.description);
    println!();
    for line in &layout.preview {
        println!("  {line}");
    }
    println!();
    println!("Steps ({} panes):", layout.pane_count);
    for (i, step) in layout.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}

fn add_layout(args: &[String]) -> Result<()> {
    let (name, rows) = match args {
        [name, rows @ ..] if !rows.is_empty() => (name, rows),
        _ => bail!("usage: splitplan add <name> <rows-per-column>..."),
    };

    if rows.len() > MAX_COLUMNS {
        bail!("at most {MAX_COLUMNS} columns are supported");
    }
    let mut columns = Vec::with_capacity(rows.len());
    for raw in rows {
        let count: usize = raw
            .parse()
            .with_context(|| format!("'{raw}' is not a row count"))?;
        if count < 1 || count > MAX_ROWS {
            bail!("row counts must be between 1 and {MAX_ROWS}");
        }
        columns.push(count);
    }

    let spec = GridSpec::new(columns)?;
    let layout = generate_layout(name, &spec);
    if layout.id.is_empty() {
        bail!("'{name}' leaves nothing usable for a layout id");
    }

    println!();
    for line in &layout.preview {
        println!("  {line}");
    }
    println!("  {}\n", layout.description);

    let mut config = Config::load_or_default();
    let id = layout.id.clone();
    config.add_layout(layout);
    let path = config.save_to_default()?;
    tracing::info!("Saved layout {} to {}", id, path.display());
    println!("Saved \"{}\" to {}", id, path.display());
    Ok(())
}

fn hide_layout(id: &str) -> Result<()> {
    let mut config = Config::load_or_default();

    if find(&config, id).is_none() {
        bail!("layout '{id}' not found — run 'splitplan list --all' to see all layouts");
    }

    config.hide_layout(id);
    config.save_to_default()?;
    println!("Hidden \"{id}\" from the picker");
    Ok(())
}

fn unhide_layout(id: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.show_layout(id);
    config.save_to_default()?;
    println!("Showing \"{id}\" in the picker");
    Ok(())
}
