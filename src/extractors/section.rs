/// Marker shared by every heading that can open or close a section.
const SECTION_MARKER: &str = "##";

/// Returns the body of the `## <label>` section of `document`.
///
/// The body runs until the next `##` (or deeper) heading. A missing heading
/// yields `None`; a heading with no content before the next one yields
/// `Some("")`.
pub fn extract_section(document: &str, label: &str) -> Option<String> {
    let wanted = label.trim().to_lowercase();
    let mut lines = document.lines();

    lines.find(|line| is_heading_for(line, &wanted))?;

    let body: Vec<&str> = lines
        .take_while(|line| !line.trim().starts_with(SECTION_MARKER))
        .collect();

    Some(body.join("\n").trim().to_string())
}

fn is_heading_for(line: &str, wanted: &str) -> bool {
    line.trim()
        .strip_prefix(SECTION_MARKER)
        .map(|title| title.trim().to_lowercase() == wanted)
        .unwrap_or(false)
}
