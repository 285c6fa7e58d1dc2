use crate::behavior::BehaviorType;
use crate::enabler::{InstanceEnabler, ObjectEnabler, SharedInstance, SimpleInstanceEnabler};
use crate::error::{InitializerError, Result};
use fxhash::FxHashMap;
use lwm2m_model::{LwM2mModel, ObjectId, ObjectModel};
use parking_lot::RwLock;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Instance id of the single instance of a non-multiple object.
pub const SINGLE_INSTANCE_ID: u16 = 0;

/// A registered instance and its runtime type, captured at registration.
#[derive(Debug, Clone)]
struct RegisteredInstance {
    instance: SharedInstance,
    behavior: BehaviorType,
}

/// Registration tables frozen by [`ObjectsInitializerBuilder::build`].
#[derive(Debug)]
pub struct ObjectsInitializerInner {
    model: LwM2mModel,
    classes: FxHashMap<ObjectId, BehaviorType>,
    instances: FxHashMap<ObjectId, RegisteredInstance>,
}

impl ObjectsInitializerInner {
    #[must_use]
    pub const fn model(&self) -> &LwM2mModel {
        &self.model
    }
}

/// Creates the object enablers of a LwM2M client from its object models.
///
/// Built once by an [`ObjectsInitializerBuilder`], then read-only: every creation
/// call sees the same registrations. Cloning is cheap.
///
/// # Example
/// ```rust
/// use lwm2m_client::ObjectsInitializer;
/// use lwm2m_model::LwM2mModel;
///
/// # fn main() -> Result<(), lwm2m_client::InitializerError> {
/// let initializer = ObjectsInitializer::builder(LwM2mModel::core()).build();
///
/// let enablers = initializer.create(&[3, 1])?;
/// assert_eq!(enablers[0].id(), 3);
/// assert_eq!(enablers[0].instance_ids(), vec![0]);
/// assert!(enablers[1].instances().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ObjectsInitializer {
    inner: Arc<ObjectsInitializerInner>,
}

impl ObjectsInitializer {
    #[must_use]
    pub fn builder(model: LwM2mModel) -> ObjectsInitializerBuilder {
        ObjectsInitializerBuilder::new(model)
    }

    /// A builder over [`LwM2mModel::core`].
    #[must_use]
    pub fn builder_with_core_model() -> ObjectsInitializerBuilder {
        ObjectsInitializerBuilder::default()
    }

    /// Creates an enabler for every mandatory object, in registry order.
    ///
    /// # Errors
    /// Returns [`InitializerError::InstantiationError`] if an instance cannot be built.
    pub fn create_mandatory(&self) -> Result<Vec<ObjectEnabler>> {
        let enablers = self
            .model
            .object_models()
            .filter(|model| model.mandatory)
            .map(|model| self.build_enabler(model))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = enablers.len(), "Mandatory object enablers created");
        Ok(enablers)
    }

    /// Creates an enabler per object id, in the given order.
    ///
    /// Every id is looked up before any instance is built, so an unknown id fails
    /// the whole call without side effects.
    ///
    /// # Errors
    /// Returns [`InitializerError::UnknownObjectId`] for the first id without a model,
    /// or [`InitializerError::InstantiationError`] if an instance cannot be built.
    pub fn create(&self, object_ids: &[ObjectId]) -> Result<Vec<ObjectEnabler>> {
        let models = object_ids
            .iter()
            .map(|&object_id| {
                self.model
                    .object_model(object_id)
                    .ok_or(InitializerError::UnknownObjectId { object_id, context: None })
            })
            .collect::<Result<Vec<_>>>()?;

        let enablers =
            models.into_iter().map(|model| self.build_enabler(model)).collect::<Result<Vec<_>>>()?;

        debug!(?object_ids, "Object enablers created");
        Ok(enablers)
    }

    /// The behavior type backing instances of `model`.
    ///
    /// An explicitly registered class wins over the type of a registered instance;
    /// objects with neither use [`SimpleInstanceEnabler`].
    #[must_use]
    pub fn resolve_type(&self, model: &ObjectModel) -> BehaviorType {
        let resolved = self
            .classes
            .get(&model.id)
            .or_else(|| self.instances.get(&model.id).map(|registered| &registered.behavior))
            .cloned();

        resolved.unwrap_or_else(|| {
            trace!(object_id = model.id, "No registration, using the default behavior");
            BehaviorType::of::<SimpleInstanceEnabler>()
        })
    }

    /// Provides an instance bound to `model`.
    ///
    /// A registered instance is reused as is (every call returns the same shared
    /// instance); otherwise a fresh one is built from the resolved behavior type.
    ///
    /// # Errors
    /// Returns [`InitializerError::InstantiationError`] if the behavior type fails
    /// to build an instance.
    pub fn instantiate(&self, model: &Arc<ObjectModel>) -> Result<SharedInstance> {
        if let Some(RegisteredInstance { instance, .. }) = self.instances.get(&model.id) {
            instance.write().set_object_model(Arc::clone(model));
            return Ok(Arc::clone(instance));
        }

        let behavior = self.resolve_type(model);
        let mut instance =
            behavior.instantiate().map_err(|source| InitializerError::InstantiationError {
                object_id: model.id,
                type_name: behavior.name().to_owned().into(),
                source,
                context: None,
            })?;
        instance.set_object_model(Arc::clone(model));

        trace!(object_id = model.id, behavior = %behavior, "Instance created");
        Ok(Arc::new(RwLock::new(instance)))
    }

    /// Builds the enabler of one object.
    ///
    /// A single-instance object gets its instance `0` right away; a multiple-instance
    /// object starts empty.
    ///
    /// # Errors
    /// Returns [`InitializerError::InstantiationError`] if the instance cannot be built.
    pub fn build_enabler(&self, model: &Arc<ObjectModel>) -> Result<ObjectEnabler> {
        let mut instances = FxHashMap::default();
        if !model.multiple {
            instances.insert(SINGLE_INSTANCE_ID, self.instantiate(model)?);
        }

        let behavior = self.resolve_type(model);
        debug!(
            object_id = model.id,
            multiple = model.multiple,
            instances = instances.len(),
            behavior = %behavior,
            "Object enabler built"
        );
        Ok(ObjectEnabler::new(Arc::clone(model), instances, behavior))
    }
}

impl Deref for ObjectsInitializer {
    type Target = ObjectsInitializerInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Collects behavior registrations before the initializer is frozen.
///
/// For a given object id either a class or an instance may be registered, never
/// both. A failed registration leaves the builder unchanged.
#[derive(Debug)]
pub struct ObjectsInitializerBuilder {
    model: LwM2mModel,
    classes: FxHashMap<ObjectId, BehaviorType>,
    instances: FxHashMap<ObjectId, RegisteredInstance>,
}

impl Default for ObjectsInitializerBuilder {
    /// A builder over the core object catalog.
    fn default() -> Self {
        Self::new(LwM2mModel::core())
    }
}

impl ObjectsInitializerBuilder {
    #[must_use]
    pub fn new(model: LwM2mModel) -> Self {
        Self { model, classes: FxHashMap::default(), instances: FxHashMap::default() }
    }

    #[must_use]
    pub const fn model(&self) -> &LwM2mModel {
        &self.model
    }

    /// Registers the behavior type used to build instances of an object.
    ///
    /// Registering again for the same object replaces the previous class.
    ///
    /// # Errors
    /// * [`InitializerError::UnknownObjectId`] if the object has no model.
    /// * [`InitializerError::ConflictingRegistration`] if an instance is registered
    ///   for the object.
    /// * [`InitializerError::NotDefaultConstructible`] if `behavior` is opaque.
    pub fn register_class(
        &mut self,
        object_id: ObjectId,
        behavior: BehaviorType,
    ) -> Result<&mut Self> {
        self.ensure_known(object_id)?;
        if self.instances.contains_key(&object_id) {
            return Err(InitializerError::ConflictingRegistration {
                object_id,
                message: "an instance is already registered, only one of class or instance is allowed"
                    .into(),
                context: None,
            });
        }
        ensure_constructible(object_id, &behavior)?;

        debug!(object_id, behavior = %behavior, "Class registered");
        if let Some(previous) = self.classes.insert(object_id, behavior) {
            warn!(object_id, previous = %previous, "Class registration replaced");
        }
        Ok(self)
    }

    /// Shorthand for [`Self::register_class`] with [`BehaviorType::of`].
    ///
    /// # Errors
    /// See [`Self::register_class`].
    pub fn register_type<T: InstanceEnabler + Default>(
        &mut self,
        object_id: ObjectId,
    ) -> Result<&mut Self> {
        self.register_class(object_id, BehaviorType::of::<T>())
    }

    /// Registers the instance every enabler of this object will share.
    ///
    /// The runtime type `T` becomes the behavior type of the object.
    ///
    /// # Errors
    /// See [`Self::register_shared_instance`].
    pub fn register_instance<T: InstanceEnabler + Default>(
        &mut self,
        object_id: ObjectId,
        instance: T,
    ) -> Result<&mut Self> {
        let instance: Box<dyn InstanceEnabler> = Box::new(instance);
        self.register_shared_instance(
            object_id,
            Arc::new(RwLock::new(instance)),
            BehaviorType::of::<T>(),
        )
    }

    /// Registers an already shared instance, keeping the caller's handle valid.
    ///
    /// `behavior` must name the concrete type of `instance`. Registering again for
    /// the same object replaces the previous instance.
    ///
    /// # Errors
    /// * [`InitializerError::UnknownObjectId`] if the object has no model.
    /// * [`InitializerError::ConflictingRegistration`] if a class is registered for
    ///   the object, or if `behavior` names another type than the instance's.
    /// * [`InitializerError::NotDefaultConstructible`] if `behavior` cannot build
    ///   instances without arguments.
    pub fn register_shared_instance(
        &mut self,
        object_id: ObjectId,
        instance: SharedInstance,
        behavior: BehaviorType,
    ) -> Result<&mut Self> {
        self.ensure_known(object_id)?;
        if self.classes.contains_key(&object_id) {
            return Err(InitializerError::ConflictingRegistration {
                object_id,
                message: "a class is already registered, only one of class or instance is allowed"
                    .into(),
                context: None,
            });
        }
        if instance.read().concrete_type_id() != behavior.type_id() {
            return Err(InitializerError::ConflictingRegistration {
                object_id,
                message: format!("the instance is not of type {behavior}").into(),
                context: None,
            });
        }
        ensure_constructible(object_id, &behavior)?;

        debug!(object_id, behavior = %behavior, "Instance registered");
        self.instances.insert(object_id, RegisteredInstance { instance, behavior });
        Ok(self)
    }

    #[must_use]
    pub fn registered_class(&self, object_id: ObjectId) -> Option<&BehaviorType> {
        self.classes.get(&object_id)
    }

    #[must_use]
    pub fn registered_instance(&self, object_id: ObjectId) -> Option<&SharedInstance> {
        self.instances.get(&object_id).map(|registered| &registered.instance)
    }

    /// Freezes the registrations.
    #[must_use]
    pub fn build(self) -> ObjectsInitializer {
        debug!(
            objects = self.model.len(),
            classes = self.classes.len(),
            instances = self.instances.len(),
            "Objects initializer built"
        );
        let inner = ObjectsInitializerInner {
            model: self.model,
            classes: self.classes,
            instances: self.instances,
        };
        ObjectsInitializer { inner: Arc::new(inner) }
    }

    fn ensure_known(&self, object_id: ObjectId) -> Result<()> {
        if self.model.contains(object_id) {
            Ok(())
        } else {
            Err(InitializerError::UnknownObjectId { object_id, context: None })
        }
    }
}

fn ensure_constructible(object_id: ObjectId, behavior: &BehaviorType) -> Result<()> {
    if behavior.is_constructible() {
        return Ok(());
    }
    Err(InitializerError::NotDefaultConstructible {
        object_id,
        type_name: behavior.name().to_owned().into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_uses_the_core_catalog() {
        let builder = ObjectsInitializerBuilder::default();
        assert_eq!(builder.model().len(), 8);
        assert!(builder.model().contains(lwm2m_model::catalog::DEVICE));
    }

    #[test]
    fn core_model_builder_matches_the_default_builder() {
        let builder = ObjectsInitializer::builder_with_core_model();
        assert_eq!(builder.model().len(), ObjectsInitializerBuilder::default().model().len());
        assert!(builder.model().object_models().map(|m| m.id).eq(0u16..8));
    }

    #[test]
    fn unregistered_objects_resolve_to_the_simple_enabler() {
        let initializer = ObjectsInitializerBuilder::default().build();
        let model = initializer.model().object_model(3).expect("device model");
        assert!(initializer.resolve_type(model).is::<SimpleInstanceEnabler>());
    }
}
