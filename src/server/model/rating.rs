//! Aircraft type ratings.
//!
//! Ratings are short codes such as `"A"` through `"F"`. Ordering is plain string ordering,
//! so `"A" < "B" < ... < "F"`, and multi-character ratings compare character by character.

use std::fmt;

/// Type rating held by a pilot or required by an airplane.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeRating(String);

impl TypeRating {
    pub fn new(rating: impl Into<String>) -> Self {
        Self(rating.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Checks whether a pilot holding `pilot` may fly an airplane with this rating.
    ///
    /// A pilot qualifies when their rating orders at or below the airplane's rating.
    ///
    /// # Arguments
    /// - `pilot` - Rating held by the pilot
    ///
    /// # Returns
    /// - `true` - Pilot rating is less than or equal to this rating
    /// - `false` - Pilot rating orders after this rating
    pub fn permits(&self, pilot: &TypeRating) -> bool {
        pilot <= self
    }
}

impl fmt::Display for TypeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
