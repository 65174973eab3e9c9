//! Custom serde helpers for backend wire formats.

/// Deserializes a Unix-seconds timestamp into `Option<DateTime<Utc>>`.
///
/// The backend sends `signed_at`, `last_viewed_at`, `expires_at` and
/// friends as epoch seconds, with `null` for events that have not
/// happened yet.
pub mod opt_timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(None),
            Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs))),
        }
    }
}

/// Deserializes a Unix-seconds timestamp into `DateTime<Utc>`.
pub mod timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs)))
    }
}

/// Deserializes a boolean that the backend may send as `true`/`false` or
/// as the integers `1`/`0` (older endpoints use the numeric form for
/// `test_mode`).
pub mod int_bool {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match BoolOrInt::deserialize(deserializer)? {
            BoolOrInt::Bool(b) => Ok(b),
            BoolOrInt::Int(i) => Ok(i != 0),
        }
    }
}
