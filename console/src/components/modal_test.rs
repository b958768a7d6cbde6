use super::*;

#[test]
fn size_classes_are_distinct() {
    assert_eq!(ModalSize::Small.class(), "modal modal--sm");
    assert_eq!(ModalSize::Medium.class(), "modal modal--md");
    assert_eq!(ModalSize::Large.class(), "modal modal--lg");
    assert_eq!(ModalSize::ExtraLarge.class(), "modal modal--xl");
}

#[test]
fn default_size_is_medium() {
    assert_eq!(ModalSize::default(), ModalSize::Medium);
}

#[test]
fn only_escape_closes() {
    assert!(closes_on_key("Escape"));
    assert!(!closes_on_key("Enter"));
    assert!(!closes_on_key("Esc"));
}

#[test]
fn escape_only_dismisses_open_modal() {
    assert!(dismisses(true, "Escape"));
    assert!(!dismisses(false, "Escape"));
    assert!(!dismisses(true, "Tab"));
}
