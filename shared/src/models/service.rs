//! Service reference model

use serde::{Deserialize, Serialize};

/// Service entity (read-only reference data)
///
/// Fetched for selection in the commission rule form; never mutated by
/// the console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    pub id: String,
    pub name: String,
}
