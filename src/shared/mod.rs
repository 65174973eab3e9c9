//! Shared newtypes and utilities used across all domain modules.
//!
//! The id types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod form;
pub mod serde_util;

pub use form::{FilePart, FormPayload};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name(s))
            }
        }
    };
}

id_newtype! {
    /// Newtype for signature request identifiers
    /// (e.g. `"fa5c8a0b0f492d768749333ad6fcc214c111e967"`).
    SignatureRequestId
}

id_newtype! {
    /// Newtype for the id of a single signature slot within a request.
    /// This is the id embedded sign-URL lookups take, not the request id.
    SignatureId
}

id_newtype! {
    /// Newtype for template identifiers.
    TemplateId
}
