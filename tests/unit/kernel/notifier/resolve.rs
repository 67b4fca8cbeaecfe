use super::*;
use crate::kernel::services::adapters::{MemoryEditor, MemoryElement};

#[test]
fn non_editable_or_missing_targets_are_ignored() {
    let plain = MemoryElement::plain("static");
    assert!(editable_target(&RawEvent::input(plain)).is_none());

    let none: RawEvent<MemoryElement> = RawEvent::new(crate::core::event::RawEventKind::Input, None);
    assert!(editable_target(&none).is_none());

    let el = MemoryElement::editable("x");
    assert_eq!(editable_target(&RawEvent::input(el.clone())), Some(&el));
}

#[test]
fn selection_takes_precedence_over_view_owner() {
    let (editor, _rx) = MemoryEditor::with_bus();
    let el = MemoryElement::editable("x");
    editor.register_view(&el, "owner");
    assert_eq!(resolve_component(&editor, &el), Some("owner"));

    editor.select(Some("selected"));
    assert_eq!(resolve_component(&editor, &el), Some("selected"));
}

#[test]
fn failed_lookup_resolves_to_none() {
    let (editor, _rx) = MemoryEditor::<&'static str>::with_bus();
    let el = MemoryElement::editable("x");
    assert_eq!(resolve_component(&editor, &el), None);

    editor.break_view(&el, "detached wrapper");
    assert_eq!(resolve_component(&editor, &el), None);
}

#[test]
fn assemble_reads_text_at_call_time() {
    let (editor, _rx) = MemoryEditor::with_bus();
    let el = MemoryElement::editable("H");
    editor.register_view(&el, 1u32);
    let event = RawEvent::input(el.clone()).with_data("i");

    el.set_text("Hi");
    let payload = assemble(&editor, &event).expect("payload");
    assert_eq!(payload.component, 1);
    assert_eq!(payload.text, "Hi");
    assert_eq!(payload.element, el);
    assert_eq!(payload.event.data.as_deref(), Some("i"));
}

#[test]
fn assemble_skips_unresolvable_targets() {
    let (editor, _rx) = MemoryEditor::<u32>::with_bus();
    let el = MemoryElement::editable("x");
    assert!(assemble(&editor, &RawEvent::input(el)).is_none());

    let plain = MemoryElement::plain("x");
    editor.register_view(&plain, 1);
    assert!(assemble(&editor, &RawEvent::input(plain)).is_none());
}
