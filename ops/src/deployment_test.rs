use super::*;
use crate::catalog::Tone;

const NOW: i64 = 1_717_249_500_000;

#[test]
fn fetch_returns_three_records_in_fixed_order() {
    let rows = fetch_deployments(Environment::Prod, NOW);
    let ids: Vec<_> = rows.iter().map(|d| d.id.as_str()).collect();
    let services: Vec<_> = rows.iter().map(|d| d.service).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(services, Service::ALL);
}

#[test]
fn fetch_stamps_requested_environment_on_every_record() {
    for env in Environment::ALL {
        assert!(fetch_deployments(env, NOW).iter().all(|d| d.environment == env));
    }
}

#[test]
fn deploy_times_are_relative_to_now() {
    let rows = fetch_deployments(Environment::Dev, NOW);
    assert_eq!(rows[0].last_deployed_ms, NOW - 3_600_000);
    assert_eq!(rows[1].last_deployed_ms, NOW - 7_200_000);
    assert_eq!(rows[2].last_deployed_ms, NOW - 1_800_000);
}

#[test]
fn payment_service_is_degraded_after_deploy() {
    let rows = fetch_deployments(Environment::Prod, NOW);
    let payment = &rows[1];
    assert_eq!(payment.status, HealthStatus::Degraded);
    assert_eq!(payment.status.tone(), Tone::Warning);
    assert_eq!(payment.health_checks.pre, HealthStatus::Healthy);
    assert_eq!(payment.health_checks.post, HealthStatus::Degraded);
    assert_eq!(payment.version, "v1.9.4");
}

#[test]
fn artifact_matches_service_and_version() {
    for d in fetch_deployments(Environment::Test, NOW) {
        assert_eq!(d.artifact, artifact_ref(d.service, &d.version));
    }
    assert_eq!(artifact_ref(Service::CheckoutService, "v3.0.0"), "checkout-service:v3.0.0");
}

#[test]
fn passing_checks_are_healthy_both_sides() {
    assert_eq!(
        HealthChecks::passing(),
        HealthChecks { pre: HealthStatus::Healthy, post: HealthStatus::Healthy }
    );
}
