use crate::documents::{DecorativeShape, Theme};

/// Returns the visual theme for a game title.
///
/// Matching is a case-insensitive substring check against an ordered table;
/// the first entry that matches wins. Titles without a dedicated theme get
/// the default one, which is not an error condition.
pub fn resolve_theme(game_name: &str) -> &'static Theme {
    let name = game_name.to_lowercase();
    THEME_TABLE
        .iter()
        .find(|matcher| matcher.patterns.iter().any(|pattern| name.contains(pattern)))
        .map(|matcher| &matcher.theme)
        .unwrap_or(&DEFAULT_THEME)
}

struct ThemeMatcher {
    patterns: &'static [&'static str],
    theme: Theme,
}

/// Themed titles, evaluated in order. New themes are added by appending an
/// entry, never by editing the matching logic.
static THEME_TABLE: [ThemeMatcher; 4] = [
    ThemeMatcher {
        patterns: &["warframe"],
        theme: Theme {
            background_gradient_stops: &["#0d1b2a", "#1b3a4b", "#2c5f72"],
            primary_color: "#00d9ff",
            secondary_color: "#ffd700",
            tagline: "Your journey through the Origin System continues",
            decorative_shape: DecorativeShape::Hexagon,
        },
    },
    ThemeMatcher {
        patterns: &["trove"],
        theme: Theme {
            background_gradient_stops: &["#2a1a4a", "#4a2a6a", "#7a4aaa"],
            primary_color: "#ff6bd6",
            secondary_color: "#ffe156",
            tagline: "Every block a new adventure",
            decorative_shape: DecorativeShape::Cube,
        },
    },
    ThemeMatcher {
        patterns: &["skyrim", "elder scrolls"],
        theme: Theme {
            background_gradient_stops: &["#1a1f25", "#2e3a42", "#4a5d6b"],
            primary_color: "#a8c5d6",
            secondary_color: "#c0a062",
            tagline: "The Dragonborn walks among us",
            decorative_shape: DecorativeShape::Dragon,
        },
    },
    ThemeMatcher {
        patterns: &["hollow knight"],
        theme: Theme {
            background_gradient_stops: &["#0e1420", "#1c2a3f", "#32465f"],
            primary_color: "#7fd1e0",
            secondary_color: "#e0e6f0",
            tagline: "The depths of Hallownest are calling",
            decorative_shape: DecorativeShape::Mask,
        },
    },
];

static DEFAULT_THEME: Theme = Theme {
    background_gradient_stops: &["#0f2027", "#203a43", "#2c5364"],
    primary_color: "#00d9ff",
    secondary_color: "#ffd700",
    tagline: "Ready for the next adventure",
    decorative_shape: DecorativeShape::Circle,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let theme = resolve_theme("Warframe");
        assert_eq!(theme.decorative_shape, DecorativeShape::Hexagon);
        assert_eq!(
            theme.tagline,
            "Your journey through the Origin System continues"
        );

        assert_eq!(resolve_theme("WARFRAME X"), resolve_theme("Warframe"));
        assert_eq!(resolve_theme("warframe: 1999"), resolve_theme("Warframe"));
    }

    #[test]
    fn warframe_theme_is_cyan_and_gold() {
        let theme = resolve_theme("Warframe");
        assert_eq!(theme.primary_color, "#00d9ff");
        assert_eq!(theme.secondary_color, "#ffd700");
    }

    #[test]
    fn skyrim_matches_via_alternate_pattern() {
        let theme = resolve_theme("The Elder Scrolls V: Skyrim");
        assert_eq!(theme.decorative_shape, DecorativeShape::Dragon);
        assert_eq!(resolve_theme("Skyrim Special Edition"), theme);
    }

    #[test]
    fn unknown_titles_get_the_default_theme() {
        let theme = resolve_theme("Minecraft");
        assert_eq!(theme.decorative_shape, DecorativeShape::Circle);
        assert_eq!(theme.primary_color, "#00d9ff");

        assert_eq!(resolve_theme(""), theme);
    }

    #[test]
    fn themed_titles_resolve_to_their_shape() {
        assert_eq!(
            resolve_theme("Trove").decorative_shape,
            DecorativeShape::Cube
        );
        assert_eq!(
            resolve_theme("Hollow Knight: Silksong").decorative_shape,
            DecorativeShape::Mask
        );
    }
}
