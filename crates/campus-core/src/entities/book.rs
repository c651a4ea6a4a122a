use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A library catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub total_copies: u32,
    /// Never exceeds `total_copies`.
    pub available_copies: u32,
}
