use super::*;

#[test]
fn warning_advice_uses_warning_alert() {
    assert_eq!(alert_class(Risk::Warning), "alert alert--warning");
    assert_eq!(alert_class(Risk::Safe), "alert alert--success");
}

#[test]
fn step_class_tags_known_rollout_steps() {
    assert_eq!(step_class("Restarting pods..."), "log-step log-step--restart");
    assert_eq!(step_class("Rollout started"), "log-step");
}
