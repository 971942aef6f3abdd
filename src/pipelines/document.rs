use std::fs;
use std::path::{Component, Path};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::IndexOptions;
use crate::error::IndexError;
use crate::extractors::{
    extract_images, extract_section, parse_key_values, parse_lines, parse_list,
};
use crate::model::{Calculations, Recipe, GENERAL_CATEGORY};

static RE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+?)\s*$").unwrap());
static RE_NEXT_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*##+").unwrap());

/// Build the record for one Markdown file under `corpus_root`.
///
/// Never fails: a file that cannot be read becomes an error record so the
/// surrounding scan keeps going.
pub fn build_recipe(path: &Path, corpus_root: &Path, options: &IndexOptions) -> Recipe {
    match parse_file(path, corpus_root, options) {
        Ok(recipe) => {
            debug!("Parsed {} as {:?}", path.display(), recipe.title);
            recipe
        }
        Err(e) => {
            warn!("Error parsing file {}: {}", path.display(), e);
            let source_file = source_file_for(path, corpus_root, &options.root_name)
                .unwrap_or_else(|_| path.to_string_lossy().into_owned());
            Recipe::error(source_file, e.to_string())
        }
    }
}

fn parse_file(
    path: &Path,
    corpus_root: &Path,
    options: &IndexOptions,
) -> Result<Recipe, IndexError> {
    let category = category_for(path, corpus_root)?;
    let source_file = source_file_for(path, corpus_root, &options.root_name)?;

    let text = fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_document(&text, category, source_file, options))
}

/// Build a record from document text that has already been read.
pub fn parse_document(
    text: &str,
    category: impl Into<String>,
    source_file: impl Into<String>,
    options: &IndexOptions,
) -> Recipe {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let sections = &options.sections;

    let (title, description) = match RE_TITLE.captures(text) {
        Some(caps) => {
            // Group 0 always exists on a successful match
            let title_end = caps.get(0).map_or(text.len(), |m| m.end());
            (caps[1].trim().to_string(), description_after(text, title_end))
        }
        None => (options.untitled_title.clone(), String::new()),
    };

    Recipe {
        title,
        description: Some(description),
        difficulty: extract_section(text, &sections.difficulty),
        ingredients: list_with_fallback(extract_section(text, &sections.ingredients)),
        calculations: Some(calculations_with_fallback(extract_section(
            text,
            &sections.calculations,
        ))),
        instructions: list_with_fallback(extract_section(text, &sections.instructions)),
        image_paths: extract_images(text),
        category: category.into(),
        source_file: source_file.into(),
        error: None,
    }
}

/// Non-blank lines between the title and the next `##` heading.
fn description_after(text: &str, title_end: usize) -> String {
    let rest = &text[title_end..];
    let end = RE_NEXT_HEADING.find(rest).map_or(rest.len(), |m| m.start());

    rest[..end]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_with_fallback(section: Option<String>) -> Vec<String> {
    match section {
        Some(text) if !text.is_empty() => {
            let items = parse_list(&text);
            if items.is_empty() {
                parse_lines(&text)
            } else {
                items
            }
        }
        _ => Vec::new(),
    }
}

fn calculations_with_fallback(section: Option<String>) -> Calculations {
    match section {
        Some(text) if !text.is_empty() => {
            let pairs = parse_key_values(&text);
            if pairs.is_empty() {
                Calculations::Raw(text)
            } else {
                Calculations::Pairs(pairs)
            }
        }
        _ => Calculations::default(),
    }
}

fn relative_to<'a>(path: &'a Path, corpus_root: &Path) -> Result<&'a Path, IndexError> {
    path.strip_prefix(corpus_root)
        .map_err(|_| IndexError::OutsideCorpus {
            path: path.to_path_buf(),
            root: corpus_root.to_path_buf(),
        })
}

/// First directory below the corpus root, or `general` for top-level files.
pub fn category_for(path: &Path, corpus_root: &Path) -> Result<String, IndexError> {
    let relative = relative_to(path, corpus_root)?;
    let mut components = relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part),
        _ => None,
    });

    let first = components.next();
    Ok(match (first, components.next()) {
        (Some(dir), Some(_)) => dir.to_string_lossy().into_owned(),
        _ => GENERAL_CATEGORY.to_string(),
    })
}

/// `<root_name>/<path relative to corpus_root>`, always `/` separated.
pub fn source_file_for(
    path: &Path,
    corpus_root: &Path,
    root_name: &str,
) -> Result<String, IndexError> {
    let relative = relative_to(path, corpus_root)?;
    let parts = std::iter::once(root_name.to_string()).chain(relative.components().filter_map(
        |c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        },
    ));

    Ok(parts.collect::<Vec<_>>().join("/"))
}
