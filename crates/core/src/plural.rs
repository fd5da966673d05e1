//! Russian cardinal-number agreement for "год" (year).

/// Grammatical form a noun takes after a cardinal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// 1, 21, 101, ... (but not 11, 111)
    One,
    /// 2-4, 22-24, ... (but not 12-14)
    Few,
    /// 0, 5-20, 25-30, 111, ...
    Many,
}

impl PluralForm {
    /// Selects the form required after `n`.
    pub fn for_count(n: u32) -> Self {
        let last = n % 10;
        let last_two = n % 100;
        if last == 1 && last_two != 11 {
            PluralForm::One
        } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
            PluralForm::Few
        } else {
            PluralForm::Many
        }
    }
}

/// The word "год" agreed with `years`.
pub fn experience_word(years: u32) -> &'static str {
    match PluralForm::for_count(years) {
        PluralForm::One => "год",
        PluralForm::Few => "года",
        PluralForm::Many => "лет",
    }
}

/// Full experience phrase, e.g. `12 лет`.
pub fn experience_phrase(years: u32) -> String {
    format!("{} {}", years, experience_word(years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_for_reference_counts() {
        let cases = [
            (0, PluralForm::Many),
            (1, PluralForm::One),
            (2, PluralForm::Few),
            (3, PluralForm::Few),
            (4, PluralForm::Few),
            (5, PluralForm::Many),
            (11, PluralForm::Many),
            (12, PluralForm::Many),
            (13, PluralForm::Many),
            (14, PluralForm::Many),
            (21, PluralForm::One),
            (22, PluralForm::Few),
            (25, PluralForm::Many),
            (100, PluralForm::Many),
            (101, PluralForm::One),
            (111, PluralForm::Many),
            (112, PluralForm::Many),
            (1001, PluralForm::One),
        ];
        for (n, expected) in cases {
            assert_eq!(PluralForm::for_count(n), expected, "n = {n}");
        }
    }

    #[test]
    fn test_experience_word() {
        assert_eq!(experience_word(1), "год");
        assert_eq!(experience_word(3), "года");
        assert_eq!(experience_word(12), "лет");
        assert_eq!(experience_phrase(21), "21 год");
        assert_eq!(experience_phrase(8), "8 лет");
    }
}
