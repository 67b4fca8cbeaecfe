//! Raw target -> logical component, and payload assembly.

use crate::core::event::RawEvent;
use crate::kernel::services::ports::{EditableElement, EditorHost, TextChange};

/// The event target, if it is a content-editable element.
pub fn editable_target<E: EditableElement>(event: &RawEvent<E>) -> Option<&E> {
    event.target().filter(|el| el.is_content_editable())
}

/// The selected component wins; otherwise the owner of the view rendered at
/// `element`. Failed lookups resolve to nothing: wrappers without a model
/// are common.
pub fn resolve_component<H: EditorHost>(host: &H, element: &H::Element) -> Option<H::Component> {
    if let Some(selected) = host.selected() {
        return Some(selected);
    }
    host.resolve_view_owner(element).ok().flatten()
}

/// Builds the payload for `event`, reading the element text now.
pub fn assemble<H: EditorHost>(
    host: &H,
    event: &RawEvent<H::Element>,
) -> Option<TextChange<H::Component, H::Element>> {
    let element = editable_target(event)?;
    let component = resolve_component(host, element)?;
    Some(TextChange::new(
        component,
        element.inner_text(),
        element.clone(),
        event.clone(),
    ))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/notifier/resolve.rs"]
mod tests;
