use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::config::{IndexConfig, SectionLabels};
use crate::error::IndexError;
use crate::model::Recipe;
use crate::pipelines::corpus::walk_corpus;
use crate::pipelines::IndexOptions;

/// Outcome of writing an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Number of records written, error records included
    pub recipes: usize,
    /// Number of error records among them
    pub errors: usize,
}

/// Builder for configuring a corpus scan
#[derive(Debug, Default)]
pub struct RecipeIndexerBuilder {
    corpus_root: Option<PathBuf>,
    options: IndexOptions,
}

impl RecipeIndexerBuilder {
    /// Take every setting from a loaded configuration
    ///
    /// # Example
    /// ```
    /// use dishes_index::{IndexConfig, RecipeIndexer};
    ///
    /// let indexer = RecipeIndexer::builder()
    ///     .from_config(&IndexConfig::default())
    ///     .build();
    /// ```
    pub fn from_config(mut self, config: &IndexConfig) -> Self {
        self.corpus_root = Some(PathBuf::from(&config.corpus_root));
        self.options = IndexOptions::from(config);
        self
    }

    /// Set the directory holding the Markdown tree
    ///
    /// # Example
    /// ```
    /// use dishes_index::RecipeIndexer;
    ///
    /// let indexer = RecipeIndexer::builder()
    ///     .corpus_root("/srv/HowToCook/dishes")
    ///     .build();
    /// ```
    pub fn corpus_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.corpus_root = Some(root.into());
        self
    }

    /// Set the name prefixed to every `source_file`
    ///
    /// Records keep this prefix whatever directory the scan actually ran on.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.options.root_name = name.into();
        self
    }

    /// Set the section headings to look for
    pub fn sections(mut self, sections: SectionLabels) -> Self {
        self.options.sections = sections;
        self
    }

    /// Set the title used for documents without a `# heading`
    pub fn untitled_title(mut self, title: impl Into<String>) -> Self {
        self.options.untitled_title = title.into();
        self
    }

    /// Set the Markdown file extensions, without the dot
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> RecipeIndexer {
        let corpus_root = self
            .corpus_root
            .unwrap_or_else(|| PathBuf::from(&self.options.root_name));

        RecipeIndexer {
            corpus_root,
            options: self.options,
        }
    }
}

/// Scans a recipe corpus and writes the resulting artifact
#[derive(Debug, Clone)]
pub struct RecipeIndexer {
    corpus_root: PathBuf,
    options: IndexOptions,
}

impl RecipeIndexer {
    /// Creates a new builder for configuring a scan
    ///
    /// # Example
    /// ```
    /// use dishes_index::RecipeIndexer;
    ///
    /// let builder = RecipeIndexer::builder();
    /// ```
    pub fn builder() -> RecipeIndexerBuilder {
        RecipeIndexerBuilder::default()
    }

    pub fn corpus_root(&self) -> &Path {
        &self.corpus_root
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Parse the whole corpus, one record per Markdown file
    pub fn scan(&self) -> Vec<Recipe> {
        walk_corpus(&self.corpus_root, &self.options)
    }

    /// Scan the corpus and replace the artifact at `output`
    ///
    /// The artifact is a pretty-printed JSON array. It is written to a
    /// temporary file next to `output` and renamed into place.
    ///
    /// # Errors
    /// Returns `IndexError` if the artifact cannot be serialized or written.
    /// Documents that fail to parse do not make this fail; they are written
    /// as error records.
    pub fn rebuild(&self, output: impl AsRef<Path>) -> Result<RebuildSummary, IndexError> {
        let output = output.as_ref();
        info!(
            "Rebuilding {} from {}",
            output.display(),
            self.corpus_root.display()
        );

        let recipes = self.scan();
        write_artifact(&recipes, output)?;

        let summary = RebuildSummary {
            recipes: recipes.len(),
            errors: recipes.iter().filter(|r| r.is_error()).count(),
        };
        info!(
            "Wrote {} recipes ({} errors) to {}",
            summary.recipes,
            summary.errors,
            output.display()
        );
        Ok(summary)
    }
}

/// Serialize `recipes` as a 4-space indented JSON array at `output`.
pub fn write_artifact(recipes: &[Recipe], output: &Path) -> Result<(), IndexError> {
    let json = to_artifact_json(recipes)?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.persist(output).map_err(|e| IndexError::Io(e.error))?;
    Ok(())
}

/// Render `recipes` the way the artifact stores them; non-ASCII text stays literal.
pub fn to_artifact_json(recipes: &[Recipe]) -> Result<String, IndexError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(recipes, &mut serializer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
