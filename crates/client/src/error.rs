//! # Initializer Errors
//!
//! This module defines the [`InitializerError`] enum and [`Result`] type returned by
//! registration and creation calls. Every variant is a configuration-time fault:
//! nothing here is retried, the calling bootstrap code is expected to fix its setup.

use lwm2m_model::ObjectId;
use std::borrow::Cow;

/// Boxed error returned by behavior-type factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A specialized [`Result`] for initializer operations.
pub type Result<T, E = InitializerError> = std::result::Result<T, E>;

/// Failures raised while registering behaviors or creating object enablers.
#[derive(Debug, thiserror::Error)]
pub enum InitializerError {
    /// The object id has no model in the registry.
    #[error("Unknown object id {object_id}{}: no model is defined for this id", format_context(.context))]
    UnknownObjectId { object_id: ObjectId, context: Option<Cow<'static, str>> },

    /// A registration contradicts another registration of the same object id,
    /// or the type it declares for its instance.
    #[error("Conflicting registration for object {object_id}{}: {message}", format_context(.context))]
    ConflictingRegistration {
        object_id: ObjectId,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The behavior type cannot be constructed without arguments.
    #[error(
        "Type {type_name} for object {object_id} has no zero-argument constructor{}",
        format_context(.context)
    )]
    NotDefaultConstructible {
        object_id: ObjectId,
        type_name: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The resolved behavior type failed while constructing an instance.
    #[error(
        "Failed to instantiate {type_name} for object {object_id}{}: {source}",
        format_context(.context)
    )]
    InstantiationError {
        object_id: ObjectId,
        type_name: Cow<'static, str>,
        source: BoxError,
        context: Option<Cow<'static, str>>,
    },
}

impl InitializerError {
    /// The object id the failure refers to.
    #[must_use]
    pub const fn object_id(&self) -> ObjectId {
        match self {
            Self::UnknownObjectId { object_id, .. }
            | Self::ConflictingRegistration { object_id, .. }
            | Self::NotDefaultConstructible { object_id, .. }
            | Self::InstantiationError { object_id, .. } => *object_id,
        }
    }

    const fn context_mut(&mut self) -> &mut Option<Cow<'static, str>> {
        match self {
            Self::UnknownObjectId { context, .. }
            | Self::ConflictingRegistration { context, .. }
            | Self::NotDefaultConstructible { context, .. }
            | Self::InstantiationError { context, .. } => context,
        }
    }
}

/// Attaches human-readable context to an [`InitializerError`].
pub trait InitializerErrorExt<T> {
    /// Sets the context of the error, replacing any previous one.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> InitializerErrorExt<T> for Result<T> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            *e.context_mut() = Some(context.into());
            e
        })
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let result: Result<()> =
            Err(InitializerError::UnknownObjectId { object_id: 42, context: None });
        let err = result.context("bootstrap").unwrap_err();
        assert_eq!(err.object_id(), 42);
        assert_eq!(
            err.to_string(),
            "Unknown object id 42 (bootstrap): no model is defined for this id"
        );
    }

    #[test]
    fn instantiation_error_exposes_source() {
        let err = InitializerError::InstantiationError {
            object_id: 3,
            type_name: "Device".into(),
            source: "sensor offline".into(),
            context: None,
        };
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "sensor offline");
    }
}
