use campus_core::enums::{EntityType, Role};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Clap value parser for entity type names.
pub fn parse_entity(raw: &str) -> Result<EntityType, String> {
    parse_enum(raw, "entity").map_err(|error| error.to_string())
}

/// Clap value parser for role names.
pub fn parse_role(raw: &str) -> Result<Role, String> {
    parse_enum(raw, "role").map_err(|error| error.to_string())
}

/// Clap value parser for `field=value` filters. Splits on the first `=`.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid filter '{raw}': expected field=value")),
    }
}
