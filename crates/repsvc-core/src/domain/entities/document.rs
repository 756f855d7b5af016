use serde::{Deserialize, Serialize};

use crate::domain::entities::descriptors::{ControllerDescriptor, ServiceDescriptor};
use crate::domain::value_objects::ResourceKind;

/// Resource entry as the deployment engine expects it: a name, a type and
/// the resource body under `properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub properties: ResourceProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceProperties {
    Service(ServiceDescriptor),
    ReplicationController(ControllerDescriptor),
}

impl Resource {
    pub fn service(descriptor: ServiceDescriptor) -> Self {
        Self {
            name: descriptor.metadata.name.clone(),
            kind: ResourceKind::Service,
            properties: ResourceProperties::Service(descriptor),
        }
    }

    pub fn controller(descriptor: ControllerDescriptor) -> Self {
        Self {
            name: descriptor.metadata.name.clone(),
            kind: ResourceKind::ReplicationController,
            properties: ResourceProperties::ReplicationController(descriptor),
        }
    }
}

/// `{ resources: [service, controller] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub resources: Vec<Resource>,
}

impl OutputDocument {
    /// Build the document; the service always comes first.
    pub fn new(service: ServiceDescriptor, controller: ControllerDescriptor) -> Self {
        Self {
            resources: vec![Resource::service(service), Resource::controller(controller)],
        }
    }

    pub fn service(&self) -> Option<&ServiceDescriptor> {
        self.resources.iter().find_map(|r| match &r.properties {
            ResourceProperties::Service(svc) => Some(svc),
            ResourceProperties::ReplicationController(_) => None,
        })
    }

    pub fn controller(&self) -> Option<&ControllerDescriptor> {
        self.resources.iter().find_map(|r| match &r.properties {
            ResourceProperties::ReplicationController(rc) => Some(rc),
            ResourceProperties::Service(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
