use crate::error::ModelError;
use crate::object::ObjectModel;
use crate::ObjectId;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable registry of object models, keyed by object id.
///
/// Cloning is cheap: the models live behind a shared [`Arc`]. Iteration follows
/// ascending object id.
#[derive(Debug, Clone, Default)]
pub struct LwM2mModel {
    objects: Arc<BTreeMap<ObjectId, Arc<ObjectModel>>>,
}

impl LwM2mModel {
    /// Builds a registry from the given models. A later model replaces an earlier
    /// one with the same id.
    pub fn new(models: impl IntoIterator<Item = ObjectModel>) -> Self {
        let objects = models.into_iter().map(|m| (m.id, Arc::new(m))).collect();
        Self { objects: Arc::new(objects) }
    }

    /// Builds a registry, rejecting duplicate object ids.
    ///
    /// # Errors
    /// Returns [`ModelError::DuplicateObjectId`] on the first id seen twice.
    pub fn try_new(models: impl IntoIterator<Item = ObjectModel>) -> Result<Self, ModelError> {
        let mut objects = BTreeMap::new();
        for model in models {
            let object_id = model.id;
            if objects.insert(object_id, Arc::new(model)).is_some() {
                return Err(ModelError::DuplicateObjectId { object_id });
            }
        }
        Ok(Self { objects: Arc::new(objects) })
    }

    #[must_use]
    pub fn object_model(&self, id: ObjectId) -> Option<&Arc<ObjectModel>> {
        self.objects.get(&id)
    }

    pub fn object_models(&self) -> impl Iterator<Item = &Arc<ObjectModel>> {
        self.objects.values()
    }

    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<ObjectModel> for LwM2mModel {
    fn from_iter<I: IntoIterator<Item = ObjectModel>>(iter: I) -> Self {
        Self::new(iter)
    }
}
