use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string
    fn as_string(&self) -> String;

    /// Parse an id from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

// The external API issues plain integer ids.

impl AggregateId for i32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>().map_err(|e| format!("Invalid i32: {}", e))
    }
}
