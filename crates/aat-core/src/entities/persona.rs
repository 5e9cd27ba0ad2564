use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A synthetic user profile used as a test subject for recommendation analysis.
///
/// Owned by the backend and immutable once returned. `ideological_leaning`
/// is an open label set (`left`, `center-left`, `center`, `neutral`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub ideological_leaning: String,
    #[serde(default)]
    pub subreddits: Vec<String>,
    #[serde(default)]
    pub youtube_channels: Vec<String>,
    #[serde(default)]
    pub search_terms: Vec<String>,
}

/// Response body of the persona collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PersonaList {
    pub personas: Vec<Persona>,
    pub total: u64,
}
