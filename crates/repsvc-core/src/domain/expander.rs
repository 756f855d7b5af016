//! Replicated service expansion.
//!
//! Turns one [`Context`] into an [`OutputDocument`] holding a `Service` and a
//! `ReplicationController`. Pure: no I/O, no shared state, and the same
//! context always yields the same document.

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        Context, LabelSet, OutputDocument,
        descriptors::{
            Container, ContainerPort, ControllerDescriptor, ControllerSpec, ObjectMeta, PodSpec,
            PodTemplate, PodTemplateMeta, PortDescriptor, ServiceDescriptor, ServiceSpec,
        },
    },
    error::DomainError,
    validation::DomainValidator,
    value_objects::{DEFAULT_NAMESPACE, LabelPolicy, ResourceKind, ServiceType},
};

/// Expands contexts under a fixed label policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestExpander {
    policy: LabelPolicy,
}

/// Context with required fields present and defaults applied.
struct ResolvedUnit<'a> {
    name: &'a str,
    container_name: &'a str,
    namespace: &'a str,
    image: &'a str,
    replicas: i32,
    container_port: i32,
}

impl ManifestExpander {
    pub const fn new(policy: LabelPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Expand a context into its service and controller.
    #[instrument(skip_all, fields(name = %context.name, policy = %self.policy))]
    pub fn expand(&self, context: &Context) -> Result<OutputDocument, DomainError> {
        let unit = resolve(context)?;
        DomainValidator::validate_labels(context.labels(), self.policy)?;

        debug!(
            container_name = unit.container_name,
            namespace = unit.namespace,
            external = context.is_external(),
            "Context resolved"
        );

        let service_name = ResourceKind::Service.resource_name(unit.name);
        let rc_name = ResourceKind::ReplicationController.resource_name(unit.name);
        let selector = generate_labels(context, unit.name);

        let service = ServiceDescriptor::new(
            unit.namespace,
            ObjectMeta {
                labels: generate_labels(context, &service_name),
                name: service_name,
            },
            ServiceSpec {
                ports: vec![generate_ports(context, unit.container_name)],
                selector: selector.clone(),
                service_type: context.is_external().then_some(ServiceType::LoadBalancer),
            },
        );

        let controller = ControllerDescriptor::new(
            unit.namespace,
            ObjectMeta {
                labels: generate_labels(context, &rc_name),
                name: rc_name,
            },
            ControllerSpec {
                replicas: unit.replicas,
                selector: selector.clone(),
                template: PodTemplate {
                    metadata: PodTemplateMeta { labels: selector },
                    spec: PodSpec {
                        containers: vec![Container {
                            name: unit.container_name.to_string(),
                            image: unit.image.to_string(),
                            ports: vec![ContainerPort {
                                name: unit.container_name.to_string(),
                                container_port: unit.container_port,
                            }],
                        }],
                    },
                },
            },
        );

        let document = OutputDocument::new(service, controller);
        DomainValidator::validate_document(&document)?;

        Ok(document)
    }
}

/// Labels for a resource called `name`: `{name: <name>}` plus every custom
/// label. A custom `name` label overwrites the synthesized one; callers that
/// must not allow this validate with [`LabelPolicy::Reject`] first.
pub fn generate_labels(context: &Context, name: &str) -> LabelSet {
    let mut labels = LabelSet::named(name);
    if let Some(custom) = context.labels() {
        labels.merge(custom);
    }
    labels
}

/// Service port for the container called `name`. Absent, zero and empty
/// inputs are all left out.
pub fn generate_ports(context: &Context, name: &str) -> PortDescriptor {
    let props = &context.properties;

    PortDescriptor {
        name: non_empty(Some(name)).map(str::to_owned),
        port: props.service_port.filter(|p| *p != 0),
        target_port: props.target_port.filter(|p| *p != 0),
        protocol: non_empty(props.protocol.as_deref()).map(str::to_owned),
    }
}

fn resolve(context: &Context) -> Result<ResolvedUnit<'_>, DomainError> {
    let props = &context.properties;

    let name = non_empty(Some(context.name.as_str()))
        .ok_or(DomainError::MissingField { field: "name" })?;
    let replicas = props
        .replicas
        .ok_or(DomainError::MissingField { field: "replicas" })?;
    let image = props
        .image
        .as_deref()
        .ok_or(DomainError::MissingField { field: "image" })?;
    let container_port = props
        .container_port
        .ok_or(DomainError::MissingField { field: "container_port" })?;

    Ok(ResolvedUnit {
        name,
        container_name: non_empty(props.container_name.as_deref()).unwrap_or(name),
        namespace: non_empty(props.namespace.as_deref()).unwrap_or(DEFAULT_NAMESPACE),
        image,
        replicas,
        container_port,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
