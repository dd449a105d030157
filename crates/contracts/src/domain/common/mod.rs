pub mod status;

pub use status::{DocumentStatus, StatusTone};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing key: as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
