use crate::enabler::InstanceEnabler;
use crate::error::BoxError;
use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Factory = Arc<dyn Fn() -> Result<Box<dyn InstanceEnabler>, BoxError> + Send + Sync>;

/// The concrete behavior backing the instances of an object.
///
/// A behavior type names an [`InstanceEnabler`] implementation and, when the
/// implementation is constructible without arguments, carries the factory that
/// produces fresh instances of it. Types without such a factory are *opaque*:
/// they can describe an existing instance but never produce a new one.
#[derive(Clone)]
pub struct BehaviorType {
    name: Cow<'static, str>,
    type_id: TypeId,
    factory: Option<Factory>,
}

impl BehaviorType {
    /// Behavior of a `Default`-constructible enabler.
    #[must_use]
    pub fn of<T: InstanceEnabler + Default>() -> Self {
        Self::from_fn(|| Ok::<_, BoxError>(T::default()))
    }

    /// Behavior produced by a fallible zero-argument factory.
    ///
    /// # Examples
    /// ```rust
    /// use lwm2m_client::{BehaviorType, SimpleInstanceEnabler};
    ///
    /// let behavior = BehaviorType::from_fn(|| {
    ///     Ok::<_, std::io::Error>(SimpleInstanceEnabler::default())
    /// });
    /// assert!(behavior.is_constructible());
    /// assert!(behavior.is::<SimpleInstanceEnabler>());
    /// ```
    pub fn from_fn<T, E, F>(make: F) -> Self
    where
        T: InstanceEnabler,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move || {
            make().map(|instance| Box::new(instance) as Box<dyn InstanceEnabler>).map_err(Into::into)
        });
        Self { name: type_name::<T>().into(), type_id: TypeId::of::<T>(), factory: Some(factory) }
    }

    /// Behavior of a type that has no zero-argument constructor.
    #[must_use]
    pub fn opaque<T: ?Sized + 'static>() -> Self {
        Self { name: type_name::<T>().into(), type_id: TypeId::of::<T>(), factory: None }
    }

    /// Overrides the display name (defaults to the Rust type name).
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Whether fresh instances can be built with no external arguments.
    #[must_use]
    pub const fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Builds a fresh, unbound instance.
    ///
    /// # Errors
    /// Returns the factory's error, or an error when the type is opaque.
    pub fn instantiate(&self) -> Result<Box<dyn InstanceEnabler>, BoxError> {
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| format!("{} has no zero-argument constructor", self.name))?;
        factory()
    }
}

impl PartialEq for BehaviorType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for BehaviorType {}

impl fmt::Debug for BehaviorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorType")
            .field("name", &self.name)
            .field("constructible", &self.is_constructible())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for BehaviorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enabler::SimpleInstanceEnabler;

    #[derive(Debug)]
    struct NoDefault;

    impl InstanceEnabler for NoDefault {
        fn set_object_model(&mut self, _model: Arc<lwm2m_model::ObjectModel>) {}
    }

    #[test]
    fn default_types_are_constructible() {
        let behavior = BehaviorType::of::<SimpleInstanceEnabler>();
        assert!(behavior.is_constructible());
        assert!(behavior.is::<SimpleInstanceEnabler>());
        assert!(behavior.instantiate().is_ok());
    }

    #[test]
    fn opaque_types_refuse_instantiation() {
        let behavior = BehaviorType::opaque::<NoDefault>();
        assert!(!behavior.is_constructible());
        let err = behavior.instantiate().map(|_| ()).unwrap_err();
        assert!(err.to_string().contains("no zero-argument constructor"));
    }

    #[test]
    fn equality_follows_the_type_not_the_name() {
        let a = BehaviorType::of::<SimpleInstanceEnabler>().named("simple");
        let b = BehaviorType::opaque::<SimpleInstanceEnabler>();
        assert_eq!(a, b);
        assert_ne!(a, BehaviorType::opaque::<NoDefault>());
        assert_eq!(a.to_string(), "simple");
    }
}
