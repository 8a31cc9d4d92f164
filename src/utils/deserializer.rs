use crate::model::category::Category;
use std::collections::HashMap;

/// Parses the bundled seed file mapping category ids to their jokes.
pub fn deserialize_seed_jokes(raw: &str) -> Result<HashMap<Category, Vec<String>>, serde_json::Error> {
    serde_json::from_str(raw)
}
