use crate::batch::icon_file_name;
use serde_json::{Map, Value};

/// `icons` block for an application manifest, mapping each size to its
/// icon path. Sizes are listed ascending and once each.
pub fn icons_block(theme: &str, sizes: &[u32], prefix: &str) -> Value {
    let mut sorted = sizes.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut icons = Map::new();
    for size in sorted {
        icons.insert(
            size.to_string(),
            Value::String(format!("{}{}", prefix, icon_file_name(theme, size))),
        );
    }
    Value::Object(icons)
}
