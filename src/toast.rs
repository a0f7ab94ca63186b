//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs
//! that remove themselves after a few seconds.  This is the visible surface
//! for recoverable view faults.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::dom_utils;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy)]
pub enum ToastKind {
    Error,
    Info,
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

#[allow(dead_code)]
pub fn info(msg: &str) {
    show(msg, ToastKind::Info);
}

pub fn show(message: &str, kind: ToastKind) {
    let document = match dom_utils::document() {
        Some(d) => d,
        None => return,
    };
    let root = match ensure_root(&document) {
        Some(r) => r,
        None => return,
    };

    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    toast.set_class_name(match kind {
        ToastKind::Error => "toast toast-error",
        ToastKind::Info => "toast toast-info",
    });
    toast.set_text_content(Some(message));
    let _ = root.append_child(&toast);

    ensure_styles(&document);

    spawn_local(async move {
        TimeoutFuture::new(DISMISS_AFTER_MS).await;
        if let Some(parent) = toast.parent_node() {
            let _ = parent.remove_child(&toast);
        }
    });
}

fn ensure_root(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id("toast-root") {
        return Some(existing);
    }
    let root = document.create_element("div").ok()?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("toast-styles").is_some() {
        return;
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1)}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
";

    let style = match document.create_element("style") {
        Ok(el) => el,
        Err(_) => return,
    };
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        let _ = head.append_child(&style);
    } else if let Some(body) = document.body() {
        let _ = body.append_child(&style);
    }
}
