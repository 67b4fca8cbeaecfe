use std::cell::Cell;

use super::*;
use crate::core::event::RawEvent;
use crate::kernel::services::ports::{EditableElement, FrameDocument};

#[test]
fn selection_and_view_lookup() {
    let (editor, _rx) = MemoryEditor::<&'static str>::with_bus();
    let el = MemoryElement::editable("x");
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.resolve_view_owner(&el), Ok(None));

    editor.register_view(&el, "text-1");
    assert_eq!(editor.resolve_view_owner(&el), Ok(Some("text-1")));

    editor.select(Some("heading"));
    assert_eq!(editor.selected(), Some("heading"));

    editor.break_view(&el, "view gone");
    assert_eq!(
        editor.resolve_view_owner(&el),
        Err(ResolveError::Lookup("view gone".to_string()))
    );
}

#[test]
fn lifecycle_callbacks_run_in_order() {
    let (editor, _rx) = MemoryEditor::<u32>::with_bus();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in [1, 2] {
        let seen = Rc::clone(&seen);
        editor.on(LifecycleHook::Loaded, Box::new(move || seen.borrow_mut().push(tag)));
    }
    assert_eq!(editor.hook_count(LifecycleHook::Loaded), 2);
    assert_eq!(editor.hook_count(LifecycleHook::Destroyed), 0);

    editor.emit(LifecycleHook::Loaded);
    editor.emit(LifecycleHook::Destroyed);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn load_replaces_frame_then_fires_loaded() {
    let (editor, _rx) = MemoryEditor::<u32>::with_bus();
    let doc = MemoryDocument::new();
    let observed = Rc::new(Cell::new(None));
    {
        let editor2 = editor.clone();
        let observed = Rc::clone(&observed);
        editor.on(
            LifecycleHook::Loaded,
            Box::new(move || observed.set(editor2.frame_document().map(|d| d.id()))),
        );
    }
    editor.load(doc.clone());
    assert_eq!(observed.get(), Some(doc.id()));
}

#[test]
fn trigger_publishes_on_the_bus() {
    let (editor, mut rx) = MemoryEditor::with_bus();
    let el = MemoryElement::editable("Hi");
    editor.trigger(
        NotificationKind::Commit,
        TextChange::new(7u32, el.inner_text(), el.clone(), RawEvent::blur(el.clone())),
    );

    let notification = rx.try_recv().expect("notification");
    assert_eq!(notification.kind, NotificationKind::Commit);
    assert_eq!(notification.payload.component, 7);
    assert_eq!(notification.payload.element, el);
}
