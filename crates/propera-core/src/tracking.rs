//! Human-facing tracking numbers for reservations.
//!
//! A tracking number has the fixed shape `TRK-XXXXXXXX` where each `X` is an
//! uppercase base-36 character. It is what clients quote when asking about
//! their reservation; the primary key stays internal.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Prefix shared by every tracking number.
pub const TRACKING_PREFIX: &str = "TRK-";

/// Number of random characters after the prefix.
pub const TRACKING_SUFFIX_LEN: usize = 8;

/// Uppercase base-36 alphabet the suffix is drawn from.
const TRACKING_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A reservation tracking number (`TRK-XXXXXXXX`).
///
/// Generation is stateless and does not consult existing reservations; the
/// space of 36^8 values makes collisions negligible at expected volume, and
/// the database carries a unique constraint as a backstop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    /// Generate a fresh tracking number from the operating system's CSPRNG.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: String = (0..TRACKING_SUFFIX_LEN)
            .map(|_| {
                let idx = OsRng.gen_range(0..TRACKING_ALPHABET.len());
                TRACKING_ALPHABET[idx] as char
            })
            .collect();
        Self(format!("{TRACKING_PREFIX}{suffix}"))
    }

    /// Returns the tracking number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the tracking number and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check whether a string has the tracking-number shape.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        let Some(suffix) = s.strip_prefix(TRACKING_PREFIX) else {
            return false;
        };
        suffix.len() == TRACKING_SUFFIX_LEN
            && suffix.bytes().all(|b| TRACKING_ALPHABET.contains(&b))
    }
}

impl Display for TrackingNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TrackingNumber> for String {
    fn from(t: TrackingNumber) -> Self {
        t.0
    }
}
