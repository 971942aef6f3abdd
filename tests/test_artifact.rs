use dishes_index::{resolve_image, Calculations, Catalog, IndexError, Recipe, RecipeIndexer};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_corpus(root: &Path) {
    write_file(
        root,
        "cat1/recipe1/recipe.md",
        "# 番茄炒蛋\n家常菜。\n\n## 预估烹饪难度\n\n## 计算\n每份两个鸡蛋\n\n## 操作\n1. 打蛋\n\n![成品](image1.jpg)\n"
            .as_bytes(),
    );
    write_file(root, "cat1/recipe1/image1.jpg", b"dummy jpeg data");
    write_file(root, "cat2/recipe2.md", b"# Test Recipe 2\n");
    write_file(root, "cat2/broken.md", &[0xc3, 0x28]);
}

#[test]
fn test_rebuild_writes_artifact() {
    let corpus = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    sample_corpus(corpus.path());
    let output = out_dir.path().join("nested").join("recipes.json");

    let summary = RecipeIndexer::builder()
        .corpus_root(corpus.path())
        .build()
        .rebuild(&output)
        .unwrap();

    assert_eq!(summary.recipes, 3);
    assert_eq!(summary.errors, 1);

    let text = fs::read_to_string(&output).unwrap();
    // Non-ASCII is stored literally, indented by four spaces
    assert!(text.contains("番茄炒蛋"));
    assert!(!text.contains("\\u"));
    assert!(text.starts_with("[\n    {"));

    let json: Value = serde_json::from_str(&text).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let tomato = &records[0];
    assert_eq!(tomato["title"], "番茄炒蛋");
    // Present but empty section is "", not null
    assert_eq!(tomato["difficulty"], "");
    assert_eq!(tomato["calculations"], "每份两个鸡蛋");
    assert_eq!(tomato["source_file"], "dishes/cat1/recipe1/recipe.md");
    assert!(tomato.get("error").is_none());

    let broken = &records[1];
    assert_eq!(broken["category"], "error");
    assert!(broken["description"].is_null());
    assert!(broken["error"].is_string());

    let plain = &records[2];
    assert!(plain["difficulty"].is_null());
    assert_eq!(plain["calculations"], serde_json::json!({}));
}

#[test]
fn test_rebuild_replaces_existing_artifact() {
    let corpus = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("recipes.json");
    fs::write(&output, "stale").unwrap();

    let indexer = RecipeIndexer::builder().corpus_root(corpus.path()).build();
    let summary = indexer.rebuild(&output).unwrap();

    assert_eq!(summary.recipes, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_catalog_round_trip_and_lookup() {
    let corpus = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    sample_corpus(corpus.path());
    let output = out_dir.path().join("recipes.json");

    let indexer = RecipeIndexer::builder().corpus_root(corpus.path()).build();
    indexer.rebuild(&output).unwrap();
    let scanned = indexer.scan();

    let catalog = Catalog::load(&output, "dishes").unwrap();
    assert_eq!(catalog.len(), 3);
    let loaded: Vec<Recipe> = catalog.iter().cloned().collect();
    assert_eq!(loaded, scanned);

    let tomato = catalog.get(0).unwrap();
    assert_eq!(
        tomato.calculations,
        Some(Calculations::Raw("每份两个鸡蛋".to_string()))
    );
    assert_eq!(
        catalog.display_image_paths(tomato),
        vec!["cat1/recipe1/image1.jpg"]
    );

    let (index, found) = catalog.find_by_source("dishes/cat2/recipe2.md").unwrap();
    assert_eq!(index, 2);
    assert_eq!(found.title, "Test Recipe 2");
    assert!(catalog.get(3).is_none());

    let image = resolve_image(corpus.path(), &catalog.display_image_paths(tomato)[0]).unwrap();
    assert_eq!(fs::read(image).unwrap(), b"dummy jpeg data");
    assert!(matches!(
        resolve_image(corpus.path(), "../recipes.json"),
        Err(IndexError::PathTraversal(_))
    ));
}

#[test]
fn test_catalog_missing_or_invalid_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("recipes.json");

    assert!(matches!(
        Catalog::load(&missing, "dishes"),
        Err(IndexError::Read { .. })
    ));
    assert!(Catalog::load_or_empty(&missing, "dishes").is_empty());

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, "{ not json").unwrap();
    assert!(matches!(
        Catalog::load(&invalid, "dishes"),
        Err(IndexError::Json(_))
    ));
    assert!(Catalog::load_or_empty(&invalid, "dishes").is_empty());
}
