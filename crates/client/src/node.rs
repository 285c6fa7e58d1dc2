//! Resource values and the responses instance enablers answer with.

use lwm2m_model::{InstanceId, ObjectId, ResourceId, ResourceModel, ResourceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A single typed resource value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Opaque(Vec<u8>),
    /// Seconds since the Unix epoch.
    Time(i64),
    Objlnk { object_id: ObjectId, instance_id: InstanceId },
}

impl Value {
    /// The null object link (`65535:65535`).
    pub const NULL_OBJLNK: Self = Self::Objlnk { object_id: u16::MAX, instance_id: u16::MAX };

    #[must_use]
    pub const fn kind(&self) -> ResourceType {
        match self {
            Self::String(_) => ResourceType::String,
            Self::Integer(_) => ResourceType::Integer,
            Self::Float(_) => ResourceType::Float,
            Self::Boolean(_) => ResourceType::Boolean,
            Self::Opaque(_) => ResourceType::Opaque,
            Self::Time(_) => ResourceType::Time,
            Self::Objlnk { .. } => ResourceType::Objlnk,
        }
    }

    /// Zero value of a resource type; `None` for types that carry no value.
    #[must_use]
    pub const fn default_for(kind: ResourceType) -> Option<Self> {
        Some(match kind {
            ResourceType::String => Self::String(String::new()),
            ResourceType::Integer => Self::Integer(0),
            ResourceType::Float => Self::Float(0.0),
            ResourceType::Boolean => Self::Boolean(false),
            ResourceType::Opaque => Self::Opaque(Vec::new()),
            ResourceType::Time => Self::Time(0),
            ResourceType::Objlnk => Self::NULL_OBJLNK,
            ResourceType::None => return None,
        })
    }
}

/// Value of a single- or multi-instance resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Single(Value),
    Multiple(BTreeMap<InstanceId, Value>),
}

/// A resource id paired with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LwM2mResource {
    pub id: ResourceId,
    pub value: ResourceValue,
}

impl LwM2mResource {
    #[must_use]
    pub const fn single(id: ResourceId, value: Value) -> Self {
        Self { id, value: ResourceValue::Single(value) }
    }

    pub fn multiple(id: ResourceId, values: impl IntoIterator<Item = (InstanceId, Value)>) -> Self {
        Self { id, value: ResourceValue::Multiple(values.into_iter().collect()) }
    }

    /// Initial value of a readable resource, used when a model is bound.
    #[must_use]
    pub fn initial(model: &ResourceModel) -> Option<Self> {
        if model.multiple {
            return Some(Self::multiple(model.id, []));
        }
        Value::default_for(model.kind).map(|value| Self::single(model.id, value))
    }

    /// Whether the value's shape and type fit the given resource definition.
    #[must_use]
    pub fn conforms_to(&self, model: &ResourceModel) -> bool {
        match &self.value {
            ResourceValue::Single(value) => !model.multiple && value.kind() == model.kind,
            ResourceValue::Multiple(values) => {
                model.multiple && values.values().all(|v| v.kind() == model.kind)
            },
        }
    }
}

/// Outcome of a request, modelled on the CoAP response codes LwM2M uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Content,
    Changed,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl ResponseCode {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Content | Self::Changed)
    }

    /// CoAP code in `class.detail` notation, e.g. `"2.05"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "2.05",
            Self::Changed => "2.04",
            Self::BadRequest => "4.00",
            Self::NotFound => "4.04",
            Self::MethodNotAllowed => "4.05",
            Self::InternalServerError => "5.00",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {self:?}", self.as_str())
    }
}

/// Response to a read request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadResponse {
    pub code: ResponseCode,
    pub content: Option<LwM2mResource>,
}

impl ReadResponse {
    #[must_use]
    pub const fn content(resource: LwM2mResource) -> Self {
        Self { code: ResponseCode::Content, content: Some(resource) }
    }

    #[must_use]
    pub const fn failure(code: ResponseCode) -> Self {
        Self { code, content: None }
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self::failure(ResponseCode::NotFound)
    }
}

/// Response to write and execute requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResponse {
    pub code: ResponseCode,
}

impl StatusResponse {
    #[must_use]
    pub const fn new(code: ResponseCode) -> Self {
        Self { code }
    }

    #[must_use]
    pub const fn changed() -> Self {
        Self::new(ResponseCode::Changed)
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self::new(ResponseCode::NotFound)
    }

    #[must_use]
    pub const fn method_not_allowed() -> Self {
        Self::new(ResponseCode::MethodNotAllowed)
    }
}

/// Callback invoked with the ids of resources whose value changed.
pub type ResourceListener = Arc<dyn Fn(&[ResourceId]) + Send + Sync>;
