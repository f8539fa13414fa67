use super::*;

#[test]
fn logs_name_service_and_target() {
    let report = analyze(Service::PaymentService, Environment::Test);
    let lines: Vec<_> = report.logs.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "[ERROR] payment-service - DB connection timeout at 2024-06-01T13:45Z");
    assert_eq!(lines[2], "[INFO] Deployment started for payment-service:test");
}

#[test]
fn health_degrades_after_deploy() {
    let health = analyze(Service::AuthService, Environment::Prod).health;
    assert_eq!(health.pre.status, HealthStatus::Healthy);
    assert_eq!(health.post.status, HealthStatus::Degraded);
    assert!(health.post.latency_ms > health.pre.latency_ms);
}

#[test]
fn health_renders_as_indented_json() {
    let pretty = analyze(Service::AuthService, Environment::Prod).health.to_pretty_json();
    let expected = r#"{
  "pre": {
    "status": "healthy",
    "latency_ms": 120,
    "error_rate": "0.1%"
  },
  "post": {
    "status": "degraded",
    "latency_ms": 800,
    "error_rate": "6.5%"
  }
}"#;
    assert_eq!(pretty, expected);
}

#[test]
fn diff_and_suggestion_point_at_db_timeout() {
    let report = analyze(Service::CheckoutService, Environment::Dev);
    assert!(report.config_diff.contains("+ DB_TIMEOUT=1"));
    assert!(report.suggestion.contains("`DB_TIMEOUT`"));
}

#[test]
fn template_only_varies_by_names() {
    let a = analyze(Service::AuthService, Environment::Prod);
    let b = analyze(Service::CheckoutService, Environment::Dev);
    assert_eq!(a.health, b.health);
    assert_eq!(a.config_diff, b.config_diff);
    assert_eq!(a.suggestion, b.suggestion);
    assert_ne!(a.logs, b.logs);
}
