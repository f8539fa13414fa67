use super::*;

#[test]
fn snapshot_reports_healthy_service() {
    let event = DeploymentEvent::snapshot(Service::AuthService, Environment::Prod, 1_717_249_500);
    assert_eq!(event.service, Service::AuthService);
    assert_eq!(event.environment, Environment::Prod);
    assert_eq!(event.status, HealthStatus::Healthy);
    assert_eq!(event.health_checks, HealthChecks::passing());
    assert_eq!(event.timestamp, 1_717_249_500);
}

#[test]
fn snapshots_get_distinct_ids() {
    let a = DeploymentEvent::snapshot(Service::AuthService, Environment::Prod, 0);
    let b = DeploymentEvent::snapshot(Service::AuthService, Environment::Prod, 0);
    assert_ne!(a.id, b.id);
}

#[test]
fn json_uses_feed_field_names() {
    let event = DeploymentEvent::snapshot(Service::PaymentService, Environment::Dev, 42);
    let value: serde_json::Value = serde_json::from_str(&event.to_json().expect("encode")).expect("json");
    assert_eq!(value["service"], "payment-service");
    assert_eq!(value["environment"], "dev");
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["health_checks"]["pre"], "healthy");
    assert_eq!(value["health_checks"]["post"], "healthy");
    assert_eq!(value["timestamp"], 42);
    assert_eq!(value["id"], event.id.to_string());
}

#[test]
fn parse_event_accepts_external_payload() {
    let text = r#"{
        "id": "6f1c2f3e-8d4b-4f55-9a1e-2b7c7c1d0e11",
        "service": "auth-service",
        "environment": "prod",
        "status": "healthy",
        "health_checks": {"pre": "healthy", "post": "healthy"},
        "timestamp": 1717249500
    }"#;
    let event = parse_event(text).expect("parse");
    assert_eq!(event.service, Service::AuthService);
    assert_eq!(event.timestamp, 1_717_249_500);
}

#[test]
fn parse_event_rejects_unknown_status() {
    let text = r#"{"id":"6f1c2f3e-8d4b-4f55-9a1e-2b7c7c1d0e11","service":"auth-service","environment":"prod","status":"on-fire","health_checks":{"pre":"healthy","post":"healthy"},"timestamp":1}"#;
    assert!(matches!(parse_event(text), Err(OpsError::MalformedEvent(_))));
}

#[test]
fn parse_event_rejects_non_json() {
    let err = parse_event("ping").expect_err("should fail");
    assert!(err.to_string().starts_with("malformed deployment event"));
}
