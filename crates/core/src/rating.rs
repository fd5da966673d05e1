//! Review star ratings with half-star granularity.

use crate::constants::RATING_SLOTS;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("rating must be a finite number")]
    NotFinite,
    #[error("rating {0} is outside 0..={max}", max = RATING_SLOTS)]
    OutOfRange(f64),
}

/// A review score between 0 and 5.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(0.0..=f64::from(RATING_SLOTS)).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Splits the rating into full, half and empty star slots.
    ///
    /// `floor(r)` full stars, one half star when `r` has a fractional part, and
    /// `5 - ceil(r)` empty stars.
    pub fn stars(self) -> StarCounts {
        let full = self.0.floor() as u8;
        let half = u8::from(self.0.fract() != 0.0);
        let empty = RATING_SLOTS - self.0.ceil() as u8;
        StarCounts { full, half, empty }
    }
}

impl serde::Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Rating::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCounts {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Renders the Bootstrap icon markup for a rating.
pub fn render_stars(rating: Rating) -> String {
    let StarCounts { full, half, empty } = rating.stars();
    let mut output = String::new();
    for _ in 0..full {
        output.push_str(r#"<i class="bi bi-star-fill"></i>"#);
    }
    for _ in 0..half {
        output.push_str(r#"<i class="bi bi-star-half"></i>"#);
    }
    for _ in 0..empty {
        output.push_str(r#"<i class="bi bi-star"></i>"#);
    }
    output
}
