use crate::operations::Operations;
use crate::{ObjectId, ResourceId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data type of a resource value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    String,
    Integer,
    Float,
    Boolean,
    Opaque,
    Time,
    Objlnk,
    /// Executable resources carry no value.
    #[default]
    None,
}

/// Definition of a single resource inside an object model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceModel {
    pub id: ResourceId,
    pub name: String,
    pub operations: Operations,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(rename = "type", default)]
    pub kind: ResourceType,
    #[serde(default)]
    pub range_enumeration: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub description: String,
}

impl ResourceModel {
    /// Creates a single-valued, optional resource definition.
    #[must_use]
    pub fn new(
        id: ResourceId,
        name: impl Into<String>,
        operations: Operations,
        kind: ResourceType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            operations,
            multiple: false,
            mandatory: false,
            kind,
            range_enumeration: String::new(),
            units: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub const fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    #[must_use]
    pub fn range_enumeration(mut self, range: impl Into<String>) -> Self {
        self.range_enumeration = range.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Schema of one LwM2M object type.
///
/// `multiple` is the object's cardinality: a single-instance object always exposes
/// instance `0`, a multiple-instance object may hold any number of instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectModel {
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, with = "resource_list")]
    pub resources: BTreeMap<ResourceId, ResourceModel>,
}

impl ObjectModel {
    /// Creates a single-instance, optional object model without resources.
    #[must_use]
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            multiple: false,
            mandatory: false,
            resources: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub const fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a resource definition, replacing any previous one with the same id.
    #[must_use]
    pub fn resource(mut self, resource: ResourceModel) -> Self {
        self.resources.insert(resource.id, resource);
        self
    }

    #[must_use]
    pub fn resource_model(&self, id: ResourceId) -> Option<&ResourceModel> {
        self.resources.get(&id)
    }
}

/// Resources travel as a list in serialized form and are keyed by id in memory.
mod resource_list {
    use super::ResourceModel;
    use crate::ResourceId;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub(super) fn serialize<S>(
        resources: &BTreeMap<ResourceId, ResourceModel>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(resources.values())
    }

    pub(super) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<ResourceId, ResourceModel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<ResourceModel>::deserialize(deserializer)?;
        Ok(list.into_iter().map(|r| (r.id, r)).collect())
    }
}
