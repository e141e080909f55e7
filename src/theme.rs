use crate::constants::{colors, themes};
use image::Rgba;
use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color([r, g, b, a])
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.0)
    }
}

/// A named background color. The eyes reuse the same color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub color: Color,
}

impl Theme {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Theme {
            name: name.into(),
            color,
        }
    }
}

/// Ordered theme mapping, built once at startup and handed to whoever renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSet {
    themes: Vec<Theme>,
}

impl ThemeSet {
    pub fn new(themes: Vec<Theme>) -> Self {
        ThemeSet { themes }
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        ThemeSet::new(vec![
            Theme::new(themes::ACTIVE, colors::ACTIVE),
            Theme::new(themes::INACTIVE, colors::INACTIVE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let set = ThemeSet::default();
        let names: Vec<&str> = set.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["active", "inactive"]);
    }

    #[test]
    fn test_lookup() {
        let set = ThemeSet::default();
        assert_eq!(set.get("active").map(|t| t.color), Some(Color::rgba(56, 197, 187, 255)));
        assert_eq!(set.get("inactive").map(|t| t.color), Some(Color::rgba(41, 44, 51, 255)));
        assert!(set.get("hover").is_none());
    }

    #[test]
    fn test_color_pixel_conversion() {
        let pixel: Rgba<u8> = Color::rgba(1, 2, 3, 4).into();
        assert_eq!(pixel, Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_yaml_shape() {
        let yaml = serde_yaml::to_string(&ThemeSet::default()).unwrap();
        let parsed: ThemeSet = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, ThemeSet::default());

        let parsed: ThemeSet =
            serde_yaml::from_str("- name: hover\n  color: [1, 2, 3, 255]\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("hover").unwrap().color, Color::rgba(1, 2, 3, 255));
    }
}
