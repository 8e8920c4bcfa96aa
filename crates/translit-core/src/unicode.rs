//! Character-level Unicode classification for transliteration keys.

/// Check the Cyrillic block (U+0400..U+04FF). Covers the modern Russian
/// alphabet and the pre-reform letters (і, ѣ, ѳ, ѵ).
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// Check the Combining Diacritical Marks block (U+0300..U+036F), which holds
/// the breve (U+0306) and the double inverted breve tie bar (U+0361).
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Number of base characters in `s`. Combining marks ride on the preceding
/// character and add no weight, so `"t\u{361}s"` weighs 2 and `"i\u{306}"`
/// weighs 1.
pub fn grapheme_weight(s: &str) -> usize {
    s.chars().filter(|&c| !is_combining_mark(c)).count()
}

/// True if every character of a non-empty string is Cyrillic.
pub fn is_cyrillic_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_cyrillic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_cyrillic('щ'));
        assert!(is_cyrillic('Ё'));
        assert!(is_cyrillic('ѣ'));
        assert!(!is_cyrillic('s'));
        assert!(!is_cyrillic('ë'));
        assert!(is_combining_mark('\u{0361}'));
        assert!(is_combining_mark('\u{0306}'));
        assert!(!is_combining_mark('i'));
    }

    #[test]
    fn test_grapheme_weight() {
        assert_eq!(grapheme_weight("shch"), 4);
        assert_eq!(grapheme_weight("t\u{361}s"), 2);
        assert_eq!(grapheme_weight("i\u{306}"), 1);
        assert_eq!(grapheme_weight("ë"), 1);
        assert_eq!(grapheme_weight(""), 0);
    }

    #[test]
    fn test_is_cyrillic_key() {
        assert!(is_cyrillic_key("щ"));
        assert!(!is_cyrillic_key("shch"));
        assert!(!is_cyrillic_key(""));
    }
}
