//! Word normalization applied before similarity scoring.
//!
//! Both transcript words and page tokens pass through [`simplify`] so that
//! punctuation, case, and accents never break a match ("Héllo," vs "hello").

/// Normalize a word for comparison: fold diacritics to their base letter,
/// drop everything that is not alphanumeric, and lowercase the rest.
pub fn simplify(word: &str) -> String {
    word.chars()
        .filter_map(fold_diacritic)
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map accented Latin letters to their unaccented base; drop combining marks.
///
/// Covers the Latin-1 Supplement and Latin Extended-A ranges, which is what
/// rendered Western-language text layers actually produce. Characters outside
/// those ranges pass through unchanged.
fn fold_diacritic(c: char) -> Option<char> {
    // Combining diacritical marks are dropped entirely
    if ('\u{0300}'..='\u{036F}').contains(&c) {
        return None;
    }

    let folded = match c {
        'à'..='å' | 'À'..='Å' | 'ā' | 'ă' | 'ą' | 'Ā' | 'Ă' | 'Ą' => 'a',
        'ç' | 'Ç' | 'ć' | 'ĉ' | 'ċ' | 'č' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'c',
        'ď' | 'đ' | 'Ď' | 'Đ' | 'ð' | 'Ð' => 'd',
        'è'..='ë' | 'È'..='Ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' | 'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'g',
        'ĥ' | 'ħ' | 'Ĥ' | 'Ħ' => 'h',
        'ì'..='ï' | 'Ì'..='Ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'i',
        'ĵ' | 'Ĵ' => 'j',
        'ķ' | 'Ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' | 'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => 'l',
        'ñ' | 'Ñ' | 'ń' | 'ņ' | 'ň' | 'Ń' | 'Ņ' | 'Ň' => 'n',
        'ò'..='ö' | 'Ò'..='Ö' | 'ø' | 'Ø' | 'ō' | 'ŏ' | 'ő' | 'Ō' | 'Ŏ' | 'Ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' | 'Ŕ' | 'Ŗ' | 'Ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'Ś' | 'Ŝ' | 'Ş' | 'Š' => 's',
        'ţ' | 'ť' | 'ŧ' | 'Ţ' | 'Ť' | 'Ŧ' => 't',
        'ù'..='ü' | 'Ù'..='Ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'u',
        'ŵ' | 'Ŵ' => 'w',
        'ý' | 'ÿ' | 'Ý' | 'ŷ' | 'Ŷ' | 'Ÿ' => 'y',
        'ź' | 'ż' | 'ž' | 'Ź' | 'Ż' | 'Ž' => 'z',
        other => other,
    };

    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(simplify("Hello,"), "hello");
        assert_eq!(simplify("\"end.\""), "end");
        assert_eq!(simplify("it's"), "its");
    }

    #[test]
    fn folds_diacritics() {
        assert_eq!(simplify("café"), "cafe");
        assert_eq!(simplify("Señor"), "senor");
        assert_eq!(simplify("naïve"), "naive");
    }

    #[test]
    fn drops_combining_marks() {
        // "e" followed by U+0301 combining acute
        assert_eq!(simplify("e\u{0301}"), "e");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(simplify("42nd"), "42nd");
    }

    #[test]
    fn pure_punctuation_simplifies_to_empty() {
        assert_eq!(simplify("—"), "");
        assert_eq!(simplify("..."), "");
    }
}
