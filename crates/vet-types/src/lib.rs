//! Validated value types shared across the vet clinic crates.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// A clinic identifier exceeded the maximum length
    #[error("clinic id exceeds maximum length of {0} characters")]
    TooLong(usize),
    /// A clinic identifier contained characters outside the allowed set
    #[error("clinic id contains invalid characters (only a-z, 0-9, '-', '_' allowed): {0}")]
    InvalidCharacters(String),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText`, trimming the input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Short stable key naming one clinic branch (for example `emerald`).
///
/// Clinic ids end up in URLs and `data-clinic-id` attributes, so they are restricted to
/// lowercase ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClinicId(String);

impl ClinicId {
    /// Maximum accepted length of a clinic id.
    pub const MAX_LEN: usize = 64;

    /// Parses a clinic id.
    ///
    /// # Errors
    ///
    /// Returns a `TextError` if the id is empty, too long, or contains disallowed characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let id = input.as_ref().trim();
        if id.is_empty() {
            return Err(TextError::Empty);
        }
        if id.len() > Self::MAX_LEN {
            return Err(TextError::TooLong(Self::MAX_LEN));
        }
        let ok = id
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_'));
        if !ok {
            return Err(TextError::InvalidCharacters(id.to_owned()));
        }
        Ok(Self(id.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClinicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClinicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ClinicId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ClinicId {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for ClinicId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ClinicId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClinicId::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Хирург  ").unwrap();
        assert_eq!(text.as_str(), "Хирург");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   \t"), Err(TextError::Empty));
    }

    #[test]
    fn clinic_id_accepts_slug() {
        let id = ClinicId::new("lenskaya_10-b").unwrap();
        assert_eq!(id.to_string(), "lenskaya_10-b");
    }

    #[test]
    fn clinic_id_rejects_markup_and_uppercase() {
        assert!(matches!(
            ClinicId::new("<script>"),
            Err(TextError::InvalidCharacters(_))
        ));
        assert!(ClinicId::new("Emerald").is_err());
        assert_eq!(ClinicId::new(""), Err(TextError::Empty));
    }

    #[test]
    fn clinic_id_rejects_overlong_input() {
        let long = "a".repeat(ClinicId::MAX_LEN + 1);
        assert_eq!(
            ClinicId::new(long),
            Err(TextError::TooLong(ClinicId::MAX_LEN))
        );
    }

    #[test]
    fn clinic_id_deserialize_validates() {
        let ok: ClinicId = serde_json::from_str("\"emerald\"").unwrap();
        assert_eq!(ok.as_str(), "emerald");
        assert!(serde_json::from_str::<ClinicId>("\"bad id\"").is_err());
    }
}
