pub mod corpus;
pub mod document;

use crate::config::{IndexConfig, SectionLabels};

/// Options shared by every document of one corpus scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Conventional corpus directory name prefixed to every `source_file`
    pub root_name: String,
    /// Title used when a document has no `# heading`
    pub untitled_title: String,
    /// Markdown file extensions, without the dot
    pub extensions: Vec<String>,
    pub sections: SectionLabels,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self::from(&IndexConfig::default())
    }
}

impl From<&IndexConfig> for IndexOptions {
    fn from(config: &IndexConfig) -> Self {
        IndexOptions {
            root_name: config.root_name.clone(),
            untitled_title: config.untitled_title.clone(),
            extensions: config.extensions.clone(),
            sections: config.sections.clone(),
        }
    }
}
