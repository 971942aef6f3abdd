pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipelines;

use std::path::Path;

pub use builder::{write_artifact, RebuildSummary, RecipeIndexer, RecipeIndexerBuilder};
pub use catalog::{resolve_image, Catalog};
pub use config::{load_config, load_config_with_env, IndexConfig, SectionLabels};
pub use error::IndexError;
pub use extractors::{extract_images, extract_section, parse_key_values, parse_list};
pub use model::{Calculations, KeyValues, Recipe};
pub use pipelines::corpus::walk_corpus;
pub use pipelines::document::{build_recipe, parse_document};
pub use pipelines::IndexOptions;

/// Parse every recipe under `corpus_root` with default options.
///
/// # Example
/// ```no_run
/// let recipes = dishes_index::parse_recipes("dishes");
/// println!("{} recipes", recipes.len());
/// ```
pub fn parse_recipes(corpus_root: impl AsRef<Path>) -> Vec<Recipe> {
    walk_corpus(corpus_root.as_ref(), &IndexOptions::default())
}
