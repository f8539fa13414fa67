use super::*;

// =============================================================
// Service
// =============================================================

#[test]
fn service_default_is_auth() {
    assert_eq!(Service::default(), Service::AuthService);
}

#[test]
fn service_all_keeps_display_order() {
    let names: Vec<_> = Service::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["auth-service", "payment-service", "checkout-service"]);
}

#[test]
fn service_parses_wire_names() {
    for svc in Service::ALL {
        assert_eq!(svc.as_str().parse::<Service>().expect("parse"), svc);
    }
}

#[test]
fn service_rejects_unknown_name() {
    let err = "login-service".parse::<Service>().expect_err("should fail");
    assert!(matches!(err, OpsError::UnknownService(ref name) if name == "login-service"));
    assert_eq!(err.to_string(), "unknown service: login-service");
}

#[test]
fn service_serializes_kebab_case() {
    let json = serde_json::to_string(&Service::CheckoutService).expect("serialize");
    assert_eq!(json, "\"checkout-service\"");
}

// =============================================================
// Environment
// =============================================================

#[test]
fn environment_default_is_prod() {
    assert_eq!(Environment::default(), Environment::Prod);
}

#[test]
fn environment_round_trips_display_and_parse() {
    for env in Environment::ALL {
        assert_eq!(env.to_string().parse::<Environment>().expect("parse"), env);
    }
}

#[test]
fn environment_parse_is_case_sensitive() {
    assert!("PROD".parse::<Environment>().is_err());
}

// =============================================================
// HealthStatus
// =============================================================

#[test]
fn health_tone_maps_each_status() {
    assert_eq!(HealthStatus::Healthy.tone(), Tone::Success);
    assert_eq!(HealthStatus::Degraded.tone(), Tone::Warning);
    assert_eq!(HealthStatus::Unhealthy.tone(), Tone::Error);
}

#[test]
fn check_tone_only_distinguishes_healthy() {
    assert_eq!(HealthStatus::Healthy.check_tone(), Tone::Success);
    assert_eq!(HealthStatus::Degraded.check_tone(), Tone::Warning);
    assert_eq!(HealthStatus::Unhealthy.check_tone(), Tone::Warning);
}

#[test]
fn health_rejects_unknown_status() {
    assert!(matches!("down".parse::<HealthStatus>(), Err(OpsError::UnknownHealth(_))));
}
