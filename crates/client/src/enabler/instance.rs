use crate::node::{LwM2mResource, ReadResponse, ResourceListener, ResponseCode, StatusResponse};
use lwm2m_model::{ObjectModel, ResourceId};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::sync::Arc;

/// An instance enabler shared between the initializer and the enablers that use it.
pub type SharedInstance = Arc<RwLock<Box<dyn InstanceEnabler>>>;

/// Behavior of one object instance.
///
/// The default request handlers answer `MethodNotAllowed`, so an implementation
/// only overrides the operations its object supports.
pub trait InstanceEnabler: Any + Debug + Send + Sync {
    /// Binds the object model this instance serves.
    fn set_object_model(&mut self, model: Arc<ObjectModel>);

    fn read(&self, _resource_id: ResourceId) -> ReadResponse {
        ReadResponse::failure(ResponseCode::MethodNotAllowed)
    }

    fn write(&mut self, _resource_id: ResourceId, _value: LwM2mResource) -> StatusResponse {
        StatusResponse::method_not_allowed()
    }

    fn execute(&mut self, _resource_id: ResourceId, _args: &[u8]) -> StatusResponse {
        StatusResponse::method_not_allowed()
    }

    /// Subscribes to resource value changes. Ignored by default.
    fn add_listener(&mut self, _listener: ResourceListener) {}
}

impl dyn InstanceEnabler {
    /// `TypeId` of the concrete enabler behind the trait object.
    #[must_use]
    pub fn concrete_type_id(&self) -> TypeId {
        (self as &dyn Any).type_id()
    }

    #[must_use]
    pub fn downcast_ref<T: InstanceEnabler>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    pub fn downcast_mut<T: InstanceEnabler>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }
}
