use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::{DirEntry, WalkDir};

use super::document::build_recipe;
use super::IndexOptions;
use crate::model::Recipe;

/// Parse every Markdown file under `corpus_root`, in path order.
///
/// Files that fail to parse show up as error records. A missing root yields
/// an empty collection.
pub fn walk_corpus(corpus_root: &Path, options: &IndexOptions) -> Vec<Recipe> {
    let files = markdown_files(corpus_root, &options.extensions);
    info!(
        "Found {} Markdown files under {}",
        files.len(),
        corpus_root.display()
    );

    files
        .iter()
        .map(|path| build_recipe(path, corpus_root, options))
        .collect()
}

/// Markdown files under `corpus_root`, sorted lexicographically by path.
///
/// Hidden files and directories are skipped, as a shell glob would. Symlinks
/// are followed; a link loop is logged and skipped.
pub fn markdown_files(corpus_root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !corpus_root.is_dir() {
        warn!(
            "Corpus root {} is not a directory, nothing to index",
            corpus_root.display()
        );
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(corpus_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extensions))
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)))
}
