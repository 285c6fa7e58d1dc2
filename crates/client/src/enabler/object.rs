use crate::behavior::BehaviorType;
use crate::enabler::SharedInstance;
use crate::node::{LwM2mResource, ReadResponse, StatusResponse};
use fxhash::FxHashMap;
use lwm2m_model::{InstanceId, ObjectId, ObjectModel, ResourceId};
use std::sync::Arc;

/// Callback invoked with `(object id, instance id, changed resource ids)`.
pub type ObjectListener = Arc<dyn Fn(ObjectId, InstanceId, &[ResourceId]) + Send + Sync>;

/// Binds an object model to its current instances and their behavior type.
///
/// The enabler is handed to the client runtime, which routes incoming requests
/// to the instances through [`ObjectEnabler::read`], [`ObjectEnabler::write`] and
/// [`ObjectEnabler::execute`]. The behavior type tells the runtime how to build
/// further instances of a multiple-instance object.
#[derive(Debug)]
pub struct ObjectEnabler {
    id: ObjectId,
    model: Arc<ObjectModel>,
    instances: FxHashMap<InstanceId, SharedInstance>,
    behavior: BehaviorType,
}

impl ObjectEnabler {
    #[must_use]
    pub fn new(
        model: Arc<ObjectModel>,
        instances: FxHashMap<InstanceId, SharedInstance>,
        behavior: BehaviorType,
    ) -> Self {
        Self { id: model.id, model, instances, behavior }
    }

    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    #[must_use]
    pub const fn model(&self) -> &Arc<ObjectModel> {
        &self.model
    }

    #[must_use]
    pub const fn behavior_type(&self) -> &BehaviorType {
        &self.behavior
    }

    #[must_use]
    pub const fn instances(&self) -> &FxHashMap<InstanceId, SharedInstance> {
        &self.instances
    }

    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&SharedInstance> {
        self.instances.get(&id)
    }

    /// Instance ids in ascending order.
    #[must_use]
    pub fn instance_ids(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.instances.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn read(&self, instance_id: InstanceId, resource_id: ResourceId) -> ReadResponse {
        self.instance(instance_id)
            .map_or_else(ReadResponse::not_found, |instance| instance.read().read(resource_id))
    }

    pub fn write(
        &self,
        instance_id: InstanceId,
        resource_id: ResourceId,
        value: LwM2mResource,
    ) -> StatusResponse {
        self.instance(instance_id).map_or_else(StatusResponse::not_found, |instance| {
            instance.write().write(resource_id, value)
        })
    }

    pub fn execute(
        &self,
        instance_id: InstanceId,
        resource_id: ResourceId,
        args: &[u8],
    ) -> StatusResponse {
        self.instance(instance_id).map_or_else(StatusResponse::not_found, |instance| {
            instance.write().execute(resource_id, args)
        })
    }

    /// Subscribes to value changes of every current instance.
    ///
    /// Listeners run while the instance is write-locked and must not access it.
    /// A registered instance is shared by every enabler built for its object, so
    /// it accumulates the listeners added through each of them; subscribe once
    /// per object, not once per enabler.
    pub fn add_listener(&self, listener: ObjectListener) {
        for (&instance_id, instance) in &self.instances {
            let object_id = self.id;
            let listener = Arc::clone(&listener);
            instance.write().add_listener(Arc::new(move |ids: &[ResourceId]| {
                listener(object_id, instance_id, ids);
            }));
        }
    }
}
