//! Resource descriptors emitted by the expander.
//!
//! Field names follow the cluster API's camelCase schema so the descriptors
//! serialize directly into the rendered document.

use serde::{Deserialize, Serialize};

use crate::domain::entities::labels::LabelSet;
use crate::domain::value_objects::{API_VERSION, ResourceKind, ServiceType};

/// `metadata` block shared by both resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub labels: LabelSet,
}

// ── Service ──────────────────────────────────────────────────────────────────

/// One service port. Every key is optional and omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl PortDescriptor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.port.is_none()
            && self.target_port.is_none()
            && self.protocol.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub ports: Vec<PortDescriptor>,
    pub selector: LabelSet,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

/// The network-facing half of a replicated service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub api_version: String,
    pub kind: ResourceKind,
    pub namespace: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

impl ServiceDescriptor {
    pub fn new(namespace: impl Into<String>, metadata: ObjectMeta, spec: ServiceSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: ResourceKind::Service,
            namespace: namespace.into(),
            metadata,
            spec,
        }
    }
}

// ── ReplicationController ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub name: String,
    pub container_port: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub ports: Vec<ContainerPort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTemplateMeta {
    pub labels: LabelSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTemplate {
    pub metadata: PodTemplateMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSpec {
    pub replicas: i32,
    pub selector: LabelSet,
    pub template: PodTemplate,
}

/// The workload half of a replicated service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDescriptor {
    pub api_version: String,
    pub kind: ResourceKind,
    pub namespace: String,
    pub metadata: ObjectMeta,
    pub spec: ControllerSpec,
}

impl ControllerDescriptor {
    pub fn new(namespace: impl Into<String>, metadata: ObjectMeta, spec: ControllerSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: ResourceKind::ReplicationController,
            namespace: namespace.into(),
            metadata,
            spec,
        }
    }

    /// Labels stamped on the pods this controller creates.
    pub fn pod_labels(&self) -> &LabelSet {
        &self.spec.template.metadata.labels
    }
}
