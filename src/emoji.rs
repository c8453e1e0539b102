//! Display glyphs for ingredient names.

pub const FALLBACK_GLYPH: &str = "🍽️";

// Declaration order is the substring search order.
const GLYPHS: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("orange", "🍊"),
    ("lemon", "🍋"),
    ("strawberry", "🍓"),
    ("grapes", "🍇"),
    ("watermelon", "🍉"),
    ("pineapple", "🍍"),
    ("mango", "🥭"),
    ("coconut", "🥥"),
    ("kiwi", "🥝"),
    ("tomato", "🍅"),
    ("eggplant", "🍆"),
    ("potato", "🥔"),
    ("carrot", "🥕"),
    ("corn", "🌽"),
    ("pepper", "🌶️"),
    ("garlic", "🧄"),
    ("onion", "🧅"),
    ("mushroom", "🍄"),
    ("broccoli", "🥦"),
    ("lettuce", "🥬"),
    ("cucumber", "🥒"),
    ("avocado", "🥑"),
    ("bread", "🍞"),
    ("cheese", "🧀"),
    ("egg", "🥚"),
    ("meat", "🥩"),
    ("chicken", "🍗"),
    ("bacon", "🥓"),
    ("fish", "🐟"),
    ("shrimp", "🍤"),
    ("rice", "🍚"),
    ("pasta", "🍝"),
    ("pizza", "🍕"),
    ("burger", "🍔"),
    ("taco", "🌮"),
    ("burrito", "🌯"),
    ("sandwich", "🥪"),
    ("milk", "🥛"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("cake", "🍰"),
    ("cookie", "🍪"),
    ("chocolate", "🍫"),
    ("ice", "🧊"),
    ("salt", "🧂"),
    ("butter", "🧈"),
    ("oil", "🫗"),
    ("honey", "🍯"),
    ("sugar", "🧁"),
    ("flour", "🌾"),
    ("spice", "🌶️"),
    ("herb", "🌿"),
    ("sauce", "🥫"),
    ("soup", "🍲"),
    ("salad", "🥗"),
    ("juice", "🧃"),
    ("water", "💧"),
    ("wine", "🍷"),
    ("beer", "🍺"),
    ("cocktail", "🍹"),
];

/// Glyph for an ingredient name: exact match first, then the first known key
/// contained in the name, then [`FALLBACK_GLYPH`].
pub fn resolve(name: &str) -> &'static str {
    let lower = name.trim().to_lowercase();

    if let Some((_, glyph)) = GLYPHS.iter().find(|(key, _)| *key == lower) {
        return glyph;
    }

    GLYPHS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, glyph)| *glyph)
        .unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(resolve("Milk"), "🥛");
        assert_eq!(resolve("BROCCOLI"), "🥦");
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(resolve("Organic Whole Milk 1 Gallon"), "🥛");
        assert_eq!(resolve("Large Brown Eggs"), "🥚");
    }

    #[test]
    fn test_substring_match_uses_declaration_order() {
        // "pineapple" contains "apple", which is declared first
        assert_eq!(resolve("Pineapple chunks"), "🍎");
        // exact match still wins over substring order
        assert_eq!(resolve("pineapple"), "🍍");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(resolve("Quinoa"), FALLBACK_GLYPH);
        assert_eq!(resolve(""), FALLBACK_GLYPH);
    }
}
