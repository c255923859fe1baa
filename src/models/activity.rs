use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity's name is the key in the
/// directory, not a field on the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails in signup order. Each email appears at most once.
    pub participants: Vec<String>,
}
