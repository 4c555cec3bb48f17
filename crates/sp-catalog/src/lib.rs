// ABOUTME: Layout catalog for splitplan.
// ABOUTME: Combines built-in presets with custom layouts from the config.

mod generate;
mod presets;

pub use generate::{generate_layout, slugify};
pub use presets::presets;

use sp_core::{Config, Layout};

/// Every known layout: presets first, then the config's custom layouts.
pub fn catalog(config: &Config) -> Vec<Layout> {
    let mut layouts: Vec<Layout> = presets().to_vec();
    layouts.extend(config.custom_layouts.iter().cloned());
    layouts
}

/// The catalog minus layouts the user has hidden from the picker.
pub fn visible(config: &Config) -> Vec<Layout> {
    catalog(config)
        .into_iter()
        .filter(|l| !config.is_hidden(&l.id))
        .collect()
}

/// Look up a layout by slug, hidden or not.
pub fn find(config: &Config, id: &str) -> Option<Layout> {
    catalog(config).into_iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::GridSpec;

    fn config_with_custom() -> Config {
        let mut config = Config::default();
        let spec = GridSpec::new(vec![1, 2]).unwrap();
        config.add_layout(generate_layout("Dev Split", &spec));
        config
    }

    #[test]
    fn catalog_appends_custom_layouts() {
        let config = config_with_custom();
        let layouts = catalog(&config);
        assert_eq!(layouts.len(), presets().len() + 1);
        assert_eq!(layouts.last().unwrap().id, "dev-split");
    }

    #[test]
    fn visible_filters_hidden_ids() {
        let mut config = config_with_custom();
        config.hide_layout("two-rows");
        config.hide_layout("dev-split");

        let layouts = visible(&config);
        assert_eq!(layouts.len(), presets().len() - 1);
        assert!(layouts.iter().all(|l| l.id != "two-rows"));
        assert!(layouts.iter().all(|l| l.id != "dev-split"));
    }

    #[test]
    fn find_locates_hidden_layouts_too() {
        let mut config = config_with_custom();
        config.hide_layout("dev-split");

        assert!(find(&config, "dev-split").is_some());
        assert!(find(&config, "grid-2x2").is_some());
        assert!(find(&config, "nope").is_none());
    }
}
