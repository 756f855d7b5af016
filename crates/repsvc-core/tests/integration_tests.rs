//! Integration tests for repsvc-core.

use repsvc_core::{
    application::{ApplicationError, ExpandService, ports::DocumentRenderer},
    domain::{Context, DocumentFormat, LabelSet, OutputDocument, ServiceType},
    error::{RepsvcError, RepsvcResult},
};

/// Minimal renderer so the public service can be driven end to end.
struct CompactJson;

impl DocumentRenderer for CompactJson {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn render(&self, document: &OutputDocument) -> RepsvcResult<String> {
        serde_json::to_string(document).map_err(|e| {
            ApplicationError::RenderingFailed {
                format: "json",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn service() -> ExpandService {
    ExpandService::new(Box::new(CompactJson))
}

fn web() -> Context {
    Context::new("web")
        .with_image("nginx")
        .with_replicas(3)
        .with_container_port(80)
}

#[test]
fn web_scenario() {
    let doc = service().expand_document(&web()).unwrap();

    let svc = doc.service().unwrap();
    assert_eq!(svc.metadata.name, "web-service");
    assert_eq!(svc.spec.selector, LabelSet::named("web"));
    assert_eq!(svc.spec.ports[0].port, None);
    assert_eq!(svc.spec.ports[0].target_port, None);

    let rc = doc.controller().unwrap();
    assert_eq!(rc.metadata.name, "web-rc");
    assert_eq!(rc.spec.replicas, 3);
    let container = &rc.spec.template.spec.containers[0];
    assert_eq!(container.name, "web");
    assert_eq!(container.image, "nginx");
    assert_eq!(container.ports[0].container_port, 80);
}

#[test]
fn web_scenario_with_tier_label() {
    let doc = service()
        .expand_document(&web().with_label("tier", "frontend"))
        .unwrap();
    let svc = doc.service().unwrap();
    let rc = doc.controller().unwrap();

    for labels in [
        &svc.metadata.labels,
        &svc.spec.selector,
        &rc.metadata.labels,
        &rc.spec.selector,
        rc.pod_labels(),
    ] {
        assert_eq!(labels.get("tier"), Some("frontend"));
        assert!(labels.contains_key("name"));
    }
}

#[test]
fn web_scenario_external() {
    let doc = service()
        .expand_document(&web().with_external_service(true))
        .unwrap();
    assert_eq!(
        doc.service().unwrap().spec.service_type,
        Some(ServiceType::LoadBalancer)
    );
}

#[test]
fn rendered_text_is_byte_identical_across_calls() {
    let ctx = web()
        .with_label("zone", "a")
        .with_label("app", "shop")
        .with_service_port(8080)
        .with_protocol("TCP");

    let first = service().expand(&ctx).unwrap();
    let second = service().expand(&ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_image_yields_no_output() {
    let ctx = Context::new("web").with_replicas(1).with_container_port(80);
    let err = service().expand(&ctx).unwrap_err();

    assert!(err.is_user_error());
    assert!(err.to_string().contains("image"));
    assert!(matches!(err, RepsvcError::Domain(_)));
}
