//! Read-only view over a serialized recipe artifact, for the presentation side.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::error;

use crate::error::IndexError;
use crate::model::Recipe;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    root_name: String,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, root_name: impl Into<String>) -> Self {
        Catalog {
            recipes,
            root_name: root_name.into(),
        }
    }

    /// Load an artifact written by [`crate::RecipeIndexer::rebuild`].
    pub fn load(path: impl AsRef<Path>, root_name: impl Into<String>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let recipes: Vec<Recipe> = serde_json::from_str(&text)?;
        Ok(Catalog::new(recipes, root_name))
    }

    /// Like [`Catalog::load`], but a missing or broken artifact gives an empty catalog.
    pub fn load_or_empty(path: impl AsRef<Path>, root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        match Catalog::load(path.as_ref(), root_name.clone()) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(
                    "Could not load {} ({}). Run the indexer first.",
                    path.as_ref().display(),
                    e
                );
                Catalog::new(Vec::new(), root_name)
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn find_by_source(&self, source_file: &str) -> Option<(usize, &Recipe)> {
        self.recipes
            .iter()
            .enumerate()
            .find(|(_, recipe)| recipe.source_file == source_file)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Image paths of `recipe` relative to the corpus root, `/` separated.
    ///
    /// Entries in `image_paths` are relative to the recipe's own directory;
    /// this joins them onto `source_file`'s directory minus the root name.
    pub fn display_image_paths(&self, recipe: &Recipe) -> Vec<String> {
        let base = recipe_dir(&recipe.source_file, &self.root_name);

        recipe
            .image_paths
            .iter()
            .map(|image| {
                base.iter()
                    .copied()
                    .chain(path_segments(image))
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect()
    }
}

/// `/`-separated segments with empty and `.` segments dropped.
fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

/// Directory segments of `source_file` without a leading root-name segment.
fn recipe_dir<'a>(source_file: &'a str, root_name: &str) -> Vec<&'a str> {
    let mut segments: Vec<&str> = path_segments(source_file).collect();
    // Drop the file name
    segments.pop();

    if segments
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case(root_name))
    {
        segments.remove(0);
    }

    segments
}

/// Resolve a request path such as `soup/tomato/1.jpg` to a file under `corpus_root`.
///
/// Absolute paths and `..` components are rejected before touching the disk.
pub fn resolve_image(corpus_root: &Path, requested: &str) -> Result<PathBuf, IndexError> {
    let relative = Path::new(requested);
    let mut resolved = corpus_root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(IndexError::PathTraversal(requested.to_string()));
            }
        }
    }

    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(IndexError::NotFound(requested.to_string()))
    }
}
