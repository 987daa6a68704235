//! Category - a named grouping for entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, ValidationError};

/// A category to classify entries. The name is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::with_id(CategoryId::new(), name)
    }

    pub fn with_id(id: CategoryId, name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
