//! Expansion input: a base name plus its properties.

use serde::{Deserialize, Serialize};

use crate::domain::entities::labels::LabelSet;

/// Input configuration for one replicated service.
///
/// Mirrors what the template engine hands an expander: the deployment-level
/// `name` and the template `properties`. Required properties are optional here
/// so an incomplete context can still be represented; the expander reports
/// what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub properties: Properties,
}

/// Template properties recognised by the expander.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub container_name: Option<String>,
    pub namespace: Option<String>,
    pub protocol: Option<String>,
    pub service_port: Option<i32>,
    pub target_port: Option<i32>,
    pub container_port: Option<i32>,
    pub replicas: Option<i32>,
    pub image: Option<String>,
    pub labels: Option<LabelSet>,
    pub external_service: Option<bool>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Properties::default(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_container_name(mut self, container_name: impl Into<String>) -> Self {
        self.properties.container_name = Some(container_name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.properties.namespace = Some(namespace.into());
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.properties.protocol = Some(protocol.into());
        self
    }

    pub fn with_service_port(mut self, port: i32) -> Self {
        self.properties.service_port = Some(port);
        self
    }

    pub fn with_target_port(mut self, port: i32) -> Self {
        self.properties.target_port = Some(port);
        self
    }

    pub fn with_container_port(mut self, port: i32) -> Self {
        self.properties.container_port = Some(port);
        self
    }

    pub fn with_replicas(mut self, replicas: i32) -> Self {
        self.properties.replicas = Some(replicas);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.properties.image = Some(image.into());
        self
    }

    /// Add one custom label, creating the label map on first use.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .labels
            .get_or_insert_with(LabelSet::new)
            .insert(key, value);
        self
    }

    pub fn with_external_service(mut self, external: bool) -> Self {
        self.properties.external_service = Some(external);
        self
    }

    /// Custom labels, if any were supplied.
    pub fn labels(&self) -> Option<&LabelSet> {
        self.properties.labels.as_ref()
    }

    pub fn is_external(&self) -> bool {
        self.properties.external_service.unwrap_or(false)
    }

    /// Lay `overlay` on top of `self`: every property set in `overlay` wins,
    /// labels are merged key by key, and a non-empty overlay name replaces
    /// the base name.
    pub fn overlay(mut self, overlay: Context) -> Self {
        if !overlay.name.is_empty() {
            self.name = overlay.name;
        }

        let base = &mut self.properties;
        let top = overlay.properties;

        if top.container_name.is_some() {
            base.container_name = top.container_name;
        }
        if top.namespace.is_some() {
            base.namespace = top.namespace;
        }
        if top.protocol.is_some() {
            base.protocol = top.protocol;
        }
        if top.service_port.is_some() {
            base.service_port = top.service_port;
        }
        if top.target_port.is_some() {
            base.target_port = top.target_port;
        }
        if top.container_port.is_some() {
            base.container_port = top.container_port;
        }
        if top.replicas.is_some() {
            base.replicas = top.replicas;
        }
        if top.image.is_some() {
            base.image = top.image;
        }
        if top.external_service.is_some() {
            base.external_service = top.external_service;
        }
        if let Some(labels) = top.labels {
            base.labels.get_or_insert_with(LabelSet::new).merge(&labels);
        }

        self
    }
}
