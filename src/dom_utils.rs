//! dom_utils.rs – thin helpers for repetitive DOM operations.

use web_sys::{Document, Element};

/// The current `document`, or `None` outside a browser context.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Drop every child of `el`.  Used for atomic region rebuilds.
pub fn remove_children(el: &Element) {
    while let Some(child) = el.first_child() {
        let _ = el.remove_child(&child);
    }
}
