use std::{fs, path::Path};

use once_cell::sync::OnceCell;
use serde::Deserialize;

/// A named color theme anchored at a base hue
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ColorTheme {
    /// Display name, also the lookup key
    pub name: String,
    /// Base hue in [0, 360)
    pub base_hue: f32,
}

impl ColorTheme {
    fn new(name: &str, base_hue: f32) -> Self {
        Self { name: name.into(), base_hue }
    }

    /// Only the Rainbow theme cycles its hue over time
    pub(crate) fn is_rainbow(&self) -> bool {
        self.name == "Rainbow"
    }
}

/// One-time cache of the built-in theme set
static BUILTIN_THEMES: OnceCell<Vec<ColorTheme>> = OnceCell::new();

/// The built-in themes, in display order
pub(crate) fn builtin_themes() -> &'static [ColorTheme] {
    BUILTIN_THEMES.get_or_init(|| {
        vec![
            ColorTheme::new("Rainbow", 0.0),
            ColorTheme::new("Ocean", 200.0),
            ColorTheme::new("Fire", 30.0),
            ColorTheme::new("Forest", 120.0),
            ColorTheme::new("Neon", 300.0),
        ]
    })
}

/// Errors that can occur when loading themes
#[derive(thiserror::Error, Debug)]
pub(crate) enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("theme '{0}' has base hue {1} outside [0, 360)")]
    HueOutOfRange(String, f32),

    #[error("theme with an empty name")]
    EmptyName,

    #[error("unknown theme '{0}'")]
    Unknown(String),
}

/// The set of selectable themes: built-ins plus any custom theme file entries
#[derive(Debug, Clone)]
pub(crate) struct ThemeRegistry {
    themes: Vec<ColorTheme>,
}

impl ThemeRegistry {
    /// Registry holding the built-in themes only
    pub(crate) fn new() -> Self {
        Self { themes: builtin_themes().to_vec() }
    }

    /// Load custom themes from a YAML file, a list of `{name, base_hue}`
    /// records. Custom entries override built-ins with the same name.
    /// Returns how many entries the file contained.
    pub(crate) fn load_file(&mut self, path: &Path) -> Result<usize, ThemeError> {
        let contents = fs::read_to_string(path)?;
        let custom = parse_themes(&contents)?;
        let count = custom.len();
        self.add_custom(custom);
        Ok(count)
    }

    fn add_custom(&mut self, custom: Vec<ColorTheme>) {
        for theme in custom {
            let existing = self
                .themes
                .iter_mut()
                .find(|t| t.name.eq_ignore_ascii_case(&theme.name));
            match existing {
                Some(slot) => *slot = theme,
                None => self.themes.push(theme),
            }
        }
    }

    /// Case-insensitive lookup by name
    pub(crate) fn find(&self, name: &str) -> Result<&ColorTheme, ThemeError> {
        self.themes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeError::Unknown(name.to_string()))
    }

    /// The theme after the named one, wrapping at the end of the registry
    pub(crate) fn next_after(&self, name: &str) -> &ColorTheme {
        let index = self
            .themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
            .unwrap_or(0);
        &self.themes[(index + 1) % self.themes.len()]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ColorTheme> {
        self.themes.iter()
    }
}

fn parse_themes(contents: &str) -> Result<Vec<ColorTheme>, ThemeError> {
    let themes: Vec<ColorTheme> = serde_yaml::from_str(contents)?;
    for theme in &themes {
        if theme.name.is_empty() {
            return Err(ThemeError::EmptyName);
        }
        if !(0.0..360.0).contains(&theme.base_hue) {
            return Err(ThemeError::HueOutOfRange(theme.name.clone(), theme.base_hue));
        }
    }
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_match_the_documented_table() {
        let names: Vec<_> = builtin_themes().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Rainbow", "Ocean", "Fire", "Forest", "Neon"]);
        assert_eq!(builtin_themes()[1].base_hue, 200.0);
    }

    #[test]
    fn only_rainbow_cycles() {
        assert!(builtin_themes()[0].is_rainbow());
        assert!(builtin_themes().iter().skip(1).all(|t| !t.is_rainbow()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.find("ocean").unwrap().base_hue, 200.0);
        assert_eq!(registry.find("NEON").unwrap().base_hue, 300.0);
        assert!(matches!(registry.find("void"), Err(ThemeError::Unknown(_))));
    }

    #[test]
    fn next_after_wraps_around() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.next_after("Rainbow").name, "Ocean");
        assert_eq!(registry.next_after("Neon").name, "Rainbow");
    }

    #[test]
    fn parses_a_theme_list() {
        let themes = parse_themes("- name: Sunset\n  base_hue: 15\n- name: Violet\n  base_hue: 275\n").unwrap();
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].name, "Sunset");
        assert_eq!(themes[1].base_hue, 275.0);
    }

    #[test]
    fn rejects_out_of_range_hue() {
        let result = parse_themes("- name: Broken\n  base_hue: 400\n");
        assert!(matches!(result, Err(ThemeError::HueOutOfRange(name, hue)) if name == "Broken" && hue == 400.0));
    }

    #[test]
    fn rejects_empty_names() {
        let result = parse_themes("- name: \"\"\n  base_hue: 10\n");
        assert!(matches!(result, Err(ThemeError::EmptyName)));
    }

    #[test]
    fn custom_themes_override_builtins_by_name() {
        let mut registry = ThemeRegistry::new();
        registry.add_custom(vec![
            ColorTheme::new("ocean", 210.0),
            ColorTheme::new("Abyss", 230.0),
        ]);
        assert_eq!(registry.find("Ocean").unwrap().base_hue, 210.0);
        assert_eq!(registry.find("Abyss").unwrap().base_hue, 230.0);
        assert_eq!(registry.iter().count(), 6);
    }
}
