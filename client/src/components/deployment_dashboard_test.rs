use super::*;

#[test]
fn check_label_names_the_stage() {
    assert_eq!(check_label("Pre-check", HealthStatus::Healthy), "Pre-check: healthy");
    assert_eq!(check_label("Post-check", HealthStatus::Degraded), "Post-check: degraded");
}
