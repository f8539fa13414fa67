use super::*;

#[test]
fn chip_class_includes_tone_modifier() {
    assert_eq!(chip_class(Tone::Warning, false), "chip chip--warning");
    assert_eq!(chip_class(Tone::Success, true), "chip chip--success chip--small");
}
