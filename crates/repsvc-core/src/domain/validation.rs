use crate::domain::{
    entities::{LabelSet, OutputDocument, document::ResourceProperties},
    error::DomainError,
    value_objects::{LabelPolicy, NAME_LABEL, ResourceKind},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check custom labels against the reserved-key policy.
    pub fn validate_labels(labels: Option<&LabelSet>, policy: LabelPolicy) -> Result<(), DomainError> {
        match (labels, policy) {
            (Some(labels), LabelPolicy::Reject) if labels.contains_key(NAME_LABEL) => {
                Err(DomainError::ReservedLabelKey {
                    key: NAME_LABEL.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Check the shape of an expanded document: service then controller,
    /// with the service selecting exactly the pods the controller creates.
    pub fn validate_document(document: &OutputDocument) -> Result<(), DomainError> {
        let kinds: Vec<ResourceKind> = document.resources.iter().map(|r| r.kind).collect();
        if kinds != [ResourceKind::Service, ResourceKind::ReplicationController] {
            return Err(DomainError::InconsistentDocument(format!(
                "expected [Service, ReplicationController], got {kinds:?}"
            )));
        }

        for resource in &document.resources {
            let body_kind = match &resource.properties {
                ResourceProperties::Service(svc) => svc.kind,
                ResourceProperties::ReplicationController(rc) => rc.kind,
            };
            if body_kind != resource.kind {
                return Err(DomainError::InconsistentDocument(format!(
                    "resource '{}' is typed {} but describes a {}",
                    resource.name, resource.kind, body_kind
                )));
            }
        }

        let (Some(service), Some(controller)) = (document.service(), document.controller()) else {
            return Err(DomainError::InconsistentDocument(
                "service or controller body missing".into(),
            ));
        };

        if service.spec.selector != controller.spec.selector {
            return Err(DomainError::InconsistentDocument(
                "service selector differs from controller selector".into(),
            ));
        }
        if controller.spec.selector != *controller.pod_labels() {
            return Err(DomainError::InconsistentDocument(
                "controller selector does not match its pod template labels".into(),
            ));
        }

        Ok(())
    }
}
