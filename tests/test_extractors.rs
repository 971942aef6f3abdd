use dishes_index::{
    extract_images, extract_section, parse_document, parse_key_values, parse_list, Calculations,
    IndexOptions,
};

#[test]
fn test_section_absent_versus_empty() {
    let doc = "# Dish\n## 预估烹饪难度\n## 操作\n1. go\n";

    assert_eq!(extract_section(doc, "计算"), None);
    assert_eq!(extract_section(doc, "预估烹饪难度"), Some(String::new()));
}

#[test]
fn test_list_markers() {
    assert_eq!(parse_list("- A\n- B\n1. C"), vec!["A", "B", "C"]);
}

#[test]
fn test_key_values() {
    let pairs = parse_key_values("糖: 10克\n盐: 5克");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs.get("糖"), Some("10克"));
    assert_eq!(pairs.get("盐"), Some("5克"));
}

#[test]
fn test_prose_falls_back_to_raw_calculations() {
    let prose = "根据人数调整用量，每人约一百克。";
    assert!(parse_key_values(prose).is_empty());

    let doc = format!("# Dish\n## 计算\n{}\n", prose);
    let recipe = parse_document(&doc, "general", "dishes/dish.md", &IndexOptions::default());
    assert_eq!(recipe.calculations, Some(Calculations::Raw(prose.to_string())));
}

#[test]
fn test_images_skip_remote() {
    assert_eq!(
        extract_images("![a](img1.jpg) ![b](https://x.com/img2.png) ![c](sub/img3.png)"),
        vec!["img1.jpg", "sub/img3.png"]
    );
}
