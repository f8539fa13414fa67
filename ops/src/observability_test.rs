use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn initial_sample_is_healthy_without_logs() {
    let s = ObservabilitySample::initial(Service::PaymentService);
    assert_eq!(s.health, HealthStatus::Healthy);
    assert_eq!(s.latency_ms, 120);
    assert!(s.logs.is_empty());
}

#[test]
fn health_threshold_is_exclusive_at_180() {
    assert_eq!(health_for_latency(179), HealthStatus::Healthy);
    assert_eq!(health_for_latency(180), HealthStatus::Degraded);
    assert_eq!(health_for_latency(50), HealthStatus::Healthy);
}

#[test]
fn sample_with_latency_builds_three_log_lines() {
    let s = sample_with_latency(Service::CheckoutService, 97);
    assert_eq!(
        s.logs,
        [
            "[INFO] checkout-service: request completed in 97ms",
            "[DEBUG] checkout-service: auth header valid",
            "[INFO] checkout-service: 200 OK",
        ]
    );
}

#[test]
fn random_samples_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let s = sample(Service::AuthService, &mut rng);
        assert!(LATENCY_RANGE_MS.contains(&s.latency_ms), "latency {} out of range", s.latency_ms);
        assert_eq!(s.health, health_for_latency(s.latency_ms));
    }
}

#[test]
fn gauge_percent_scales_to_250ms() {
    assert!((sample_with_latency(Service::AuthService, 125).gauge_percent() - 50.0).abs() < 1e-9);
    assert!((sample_with_latency(Service::AuthService, 400).gauge_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn classify_reads_bracketed_tags() {
    assert_eq!(LogLevel::classify("[INFO] x"), LogLevel::Info);
    assert_eq!(LogLevel::classify("[DEBUG] x"), LogLevel::Debug);
    assert_eq!(LogLevel::classify("[WARN] x"), LogLevel::Warn);
    assert_eq!(LogLevel::classify("[ERROR] x"), LogLevel::Error);
    assert_eq!(LogLevel::classify("plain"), LogLevel::Other);
}

#[test]
fn classify_prefers_info_when_tags_mix() {
    assert_eq!(LogLevel::classify("[ERROR] retry after [INFO] marker"), LogLevel::Info);
}
