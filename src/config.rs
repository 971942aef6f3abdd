use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

/// Indexer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct IndexConfig {
    /// Directory holding the Markdown recipe tree
    #[serde(default = "default_corpus_root")]
    pub corpus_root: String,
    /// Where the JSON artifact is written
    #[serde(default = "default_output")]
    pub output: String,
    /// Conventional corpus directory name every `source_file` is rooted at
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// Title used when a document has no `# heading`
    #[serde(default = "default_untitled_title")]
    pub untitled_title: String,
    /// File extensions treated as Markdown (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Section headings looked up in every document
    #[serde(default)]
    pub sections: SectionLabels,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            corpus_root: default_corpus_root(),
            output: default_output(),
            root_name: default_root_name(),
            untitled_title: default_untitled_title(),
            extensions: default_extensions(),
            sections: SectionLabels::default(),
        }
    }
}

/// Literal `##` heading labels of the recipe sections
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SectionLabels {
    #[serde(default = "default_difficulty_label")]
    pub difficulty: String,
    #[serde(default = "default_ingredients_label")]
    pub ingredients: String,
    #[serde(default = "default_calculations_label")]
    pub calculations: String,
    #[serde(default = "default_instructions_label")]
    pub instructions: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty_label(),
            ingredients: default_ingredients_label(),
            calculations: default_calculations_label(),
            instructions: default_instructions_label(),
        }
    }
}

// Default value functions
fn default_corpus_root() -> String {
    "dishes".to_string()
}

fn default_output() -> String {
    "recipes.json".to_string()
}

fn default_root_name() -> String {
    "dishes".to_string()
}

fn default_untitled_title() -> String {
    "Untitled Recipe".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_difficulty_label() -> String {
    "预估烹饪难度".to_string()
}

fn default_ingredients_label() -> String {
    "必备原料和工具".to_string()
}

fn default_calculations_label() -> String {
    "计算".to_string()
}

fn default_instructions_label() -> String {
    "操作".to_string()
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with DISHES__ prefix
/// 2. The given config file, or config.toml in the current directory
/// 3. Default values
///
/// Environment variable format: DISHES__SECTIONS__DIFFICULTY. List fields
/// take comma-separated values: DISHES__EXTENSIONS=md,markdown
pub fn load_config(path: Option<&str>) -> Result<IndexConfig, ConfigError> {
    load_config_with_env(path, None)
}

/// Like [`load_config`], reading variables from `env` instead of the process
/// environment when given.
pub fn load_config_with_env(
    path: Option<&str>,
    env: Option<Map<String, String>>,
) -> Result<IndexConfig, ConfigError> {
    let file = match path {
        // An explicitly requested file must exist
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: DISHES__SECTIONS__DIFFICULTY
        .add_source(
            Environment::with_prefix("DISHES")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("extensions")
                .source(env),
        )
        .build()?;

    settings.try_deserialize()
}
