use crate::enabler::InstanceEnabler;
use crate::node::{
    LwM2mResource, ReadResponse, ResourceListener, ResponseCode, StatusResponse,
};
use lwm2m_model::{ObjectModel, ResourceId, ResourceModel};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Default behavior for objects without a registered implementation.
///
/// Stores resource values in memory and enforces the operations declared by the
/// bound object model. No custom logic runs on read, write or execute.
#[derive(Default)]
pub struct SimpleInstanceEnabler {
    model: Option<Arc<ObjectModel>>,
    resources: BTreeMap<ResourceId, LwM2mResource>,
    listeners: Vec<ResourceListener>,
}

impl SimpleInstanceEnabler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn object_model(&self) -> Option<&Arc<ObjectModel>> {
        self.model.as_ref()
    }

    /// Current value of a resource, regardless of its declared operations.
    #[must_use]
    pub fn resource(&self, id: ResourceId) -> Option<&LwM2mResource> {
        self.resources.get(&id)
    }

    /// Updates a value from the device side.
    ///
    /// Unlike [`InstanceEnabler::write`], operations are not checked: this is how
    /// the client publishes values of read-only resources. Listeners are notified
    /// when the value changed.
    pub fn set_resource(&mut self, resource: LwM2mResource) {
        let id = resource.id;
        if self.resources.insert(id, resource.clone()).as_ref() != Some(&resource) {
            self.fire_resources_change(&[id]);
        }
    }

    fn resource_model(&self, id: ResourceId) -> Option<&ResourceModel> {
        self.model.as_ref().and_then(|model| model.resource_model(id))
    }

    fn fire_resources_change(&self, ids: &[ResourceId]) {
        for listener in &self.listeners {
            listener(ids);
        }
    }
}

impl InstanceEnabler for SimpleInstanceEnabler {
    fn set_object_model(&mut self, model: Arc<ObjectModel>) {
        // Values set before binding, or under the same object, survive.
        if self.model.as_ref().is_some_and(|current| current.id != model.id) {
            self.resources.clear();
        }

        for resource in model.resources.values().filter(|r| r.operations.is_readable()) {
            if let Some(initial) = LwM2mResource::initial(resource) {
                self.resources.entry(resource.id).or_insert(initial);
            }
        }

        trace!(object_id = model.id, resources = self.resources.len(), "Object model bound");
        self.model = Some(model);
    }

    fn read(&self, resource_id: ResourceId) -> ReadResponse {
        let Some(definition) = self.resource_model(resource_id) else {
            return ReadResponse::not_found();
        };
        if !definition.operations.is_readable() {
            return ReadResponse::failure(ResponseCode::MethodNotAllowed);
        }
        self.resources
            .get(&resource_id)
            .map_or_else(ReadResponse::not_found, |r| ReadResponse::content(r.clone()))
    }

    fn write(&mut self, resource_id: ResourceId, value: LwM2mResource) -> StatusResponse {
        let Some(definition) = self.resource_model(resource_id) else {
            return StatusResponse::not_found();
        };
        if !definition.operations.is_writable() {
            return StatusResponse::method_not_allowed();
        }
        if value.id != resource_id || !value.conforms_to(definition) {
            return StatusResponse::new(ResponseCode::BadRequest);
        }

        self.set_resource(value);
        StatusResponse::changed()
    }

    fn execute(&mut self, resource_id: ResourceId, _args: &[u8]) -> StatusResponse {
        match self.resource_model(resource_id) {
            None => StatusResponse::not_found(),
            Some(definition) if !definition.operations.is_executable() => {
                StatusResponse::method_not_allowed()
            },
            Some(_) => StatusResponse::changed(),
        }
    }

    fn add_listener(&mut self, listener: ResourceListener) {
        self.listeners.push(listener);
    }
}

impl fmt::Debug for SimpleInstanceEnabler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleInstanceEnabler")
            .field("object_id", &self.model.as_ref().map(|m| m.id))
            .field("resources", &self.resources)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
