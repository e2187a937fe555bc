//! Card type palette.
//!
//! Each type tag maps to a two-stop gradient used for the card base and the
//! ambient backdrop of the detail view.

/// Two-stop gradient for a card type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTheme {
    pub from: &'static str,
    pub to: &'static str,
}

impl TypeTheme {
    /// `linear-gradient` running top-left to bottom-right
    pub fn gradient(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

pub const NORMAL: TypeTheme = TypeTheme { from: "#9ca3af", to: "#6b7280" };

/// Backdrop for cards whose primary type has no theme
pub const NEUTRAL_BACKDROP: TypeTheme = TypeTheme { from: "#111827", to: "#000000" };

/// Label color for an untyped card
pub const NEUTRAL_ACCENT: &str = "#9ca3af";

/// Theme for a type tag, if it has one
pub fn type_theme(tag: &str) -> Option<TypeTheme> {
    let theme = match tag {
        "Fire" => TypeTheme { from: "#f97316", to: "#dc2626" },
        "Water" => TypeTheme { from: "#60a5fa", to: "#2563eb" },
        "Grass" => TypeTheme { from: "#4ade80", to: "#16a34a" },
        "Lightning" => TypeTheme { from: "#fde047", to: "#eab308" },
        "Psychic" => TypeTheme { from: "#c084fc", to: "#9333ea" },
        "Fighting" => TypeTheme { from: "#c2410c", to: "#991b1b" },
        "Darkness" => TypeTheme { from: "#374151", to: "#000000" },
        "Metal" => TypeTheme { from: "#d1d5db", to: "#6b7280" },
        "Dragon" => TypeTheme { from: "#6366f1", to: "#7e22ce" },
        "Fairy" => TypeTheme { from: "#f9a8d4", to: "#ec4899" },
        "Normal" => NORMAL,
        "Ghost" => TypeTheme { from: "#6b21a8", to: "#312e81" },
        "Poison" => TypeTheme { from: "#a855f7", to: "#db2777" },
        _ => return None,
    };
    Some(theme)
}

/// Card base theme: the primary type's, or Normal
pub fn card_theme(primary_type: Option<&str>) -> TypeTheme {
    primary_type.and_then(type_theme).unwrap_or(NORMAL)
}

/// Detail view backdrop: the primary type's, or a dark neutral
pub fn backdrop_theme(primary_type: Option<&str>) -> TypeTheme {
    primary_type.and_then(type_theme).unwrap_or(NEUTRAL_BACKDROP)
}

/// Accent color for type labels in the detail panel
pub fn accent_color(primary_type: Option<&str>) -> &'static str {
    primary_type
        .and_then(type_theme)
        .map(|theme| theme.from)
        .unwrap_or(NEUTRAL_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_have_themes() {
        for tag in ["Fire", "Water", "Grass", "Lightning", "Psychic", "Dragon", "Ghost", "Poison"] {
            assert!(type_theme(tag).is_some(), "{tag}");
        }
        // Flying is used by Gyarados and Dragonite as a secondary type only
        assert!(type_theme("Flying").is_none());
    }

    #[test]
    fn unknown_type_falls_back() {
        assert_eq!(card_theme(Some("Sound")), NORMAL);
        assert_eq!(card_theme(None), NORMAL);
        assert_eq!(backdrop_theme(Some("Sound")), NEUTRAL_BACKDROP);
        assert_eq!(accent_color(None), NEUTRAL_ACCENT);
        assert_eq!(accent_color(Some("Fire")), "#f97316");
    }

    #[test]
    fn gradient_css() {
        assert_eq!(
            card_theme(Some("Water")).gradient(),
            "linear-gradient(135deg, #60a5fa, #2563eb)"
        );
    }
}
