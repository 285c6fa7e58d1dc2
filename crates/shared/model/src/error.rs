use crate::ObjectId;
use std::borrow::Cow;

/// Errors raised while assembling models.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Two object models share the same id.
    #[error("Duplicate object model {object_id}")]
    DuplicateObjectId { object_id: ObjectId },

    /// An operations string is not one of the registry notations.
    #[error("Invalid operations '{value}'")]
    InvalidOperations { value: Cow<'static, str> },
}
