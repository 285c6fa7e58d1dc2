use lwm2m_client::node::{LwM2mResource, ReadResponse, StatusResponse, Value};
use lwm2m_client::{BehaviorType, InstanceEnabler};
use lwm2m_model::{LwM2mModel, ObjectModel, Operations, ResourceId, ResourceModel, ResourceType};
use std::sync::Arc;

pub const SINGLE_MANDATORY: u16 = 5;
pub const MULTIPLE_MANDATORY: u16 = 6;
pub const SINGLE_OPTIONAL: u16 = 3;
pub const MULTIPLE_OPTIONAL: u16 = 4;
pub const LONE_MANDATORY: u16 = 1;
pub const UNKNOWN: u16 = 999;

/// A small registry mixing cardinalities and mandatory flags.
#[must_use]
pub fn test_model() -> LwM2mModel {
    let counter = ResourceModel::new(0, "Counter", Operations::RW, ResourceType::Integer);
    LwM2mModel::new([
        ObjectModel::new(LONE_MANDATORY, "Lone").mandatory(true).resource(counter.clone()),
        ObjectModel::new(SINGLE_OPTIONAL, "Single optional").resource(counter.clone()),
        ObjectModel::new(MULTIPLE_OPTIONAL, "Multiple optional").multiple(true),
        ObjectModel::new(SINGLE_MANDATORY, "Single mandatory")
            .mandatory(true)
            .resource(counter)
            .resource(ResourceModel::new(1, "Reset", Operations::EXECUTE, ResourceType::None)),
        ObjectModel::new(MULTIPLE_MANDATORY, "Multiple mandatory").multiple(true).mandatory(true),
    ])
}

/// A default-constructible enabler counting the requests it served.
///
/// Relies on the trait's default handlers except for `read`.
#[derive(Debug, Default)]
pub struct CountingEnabler {
    pub model: Option<Arc<ObjectModel>>,
    pub binds: usize,
    pub reads: std::sync::atomic::AtomicUsize,
}

impl InstanceEnabler for CountingEnabler {
    fn set_object_model(&mut self, model: Arc<ObjectModel>) {
        self.model = Some(model);
        self.binds += 1;
    }

    fn read(&self, resource_id: ResourceId) -> ReadResponse {
        let reads = self.reads.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        let reads = i64::try_from(reads).unwrap_or(i64::MAX);
        ReadResponse::content(LwM2mResource::single(resource_id, Value::Integer(reads)))
    }
}

/// An enabler that needs a constructor argument.
#[derive(Debug)]
pub struct WiredEnabler {
    pub port: u16,
}

impl WiredEnabler {
    #[must_use]
    pub const fn new(port: u16) -> Self {
        Self { port }
    }
}

impl InstanceEnabler for WiredEnabler {
    fn set_object_model(&mut self, _model: Arc<ObjectModel>) {}

    fn execute(&mut self, _resource_id: ResourceId, _args: &[u8]) -> StatusResponse {
        StatusResponse::changed()
    }
}

/// A behavior whose factory always fails.
#[must_use]
pub fn failing_behavior() -> BehaviorType {
    BehaviorType::from_fn(|| Err::<CountingEnabler, _>("sensor bus unavailable"))
}
