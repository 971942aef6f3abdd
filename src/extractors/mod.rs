//! Text-level extractors applied to a single Markdown document.

mod images;
mod key_value;
mod list;
mod section;

pub use self::images::extract_images;
pub use self::key_value::parse_key_values;
pub use self::list::{parse_list, parse_lines};
pub use self::section::extract_section;
