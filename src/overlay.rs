use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::status::CaptureStatus;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Fill in the static page texts.
pub fn init_texts(document: &web::Document) {
    dom::set_text(document, TITLE_ID, TITLE_TEXT);
    dom::set_text(document, LOADING_TEXT_ID, LOADING_TEXT);
}

/// Reflect the capture status in the loading overlay and preview label.
pub fn apply(document: &web::Document, status: &CaptureStatus) {
    if status.show_loading_overlay() {
        show(document, LOADING_OVERLAY_ID);
    } else {
        hide(document, LOADING_OVERLAY_ID);
    }
    match status.label() {
        Some(text) => {
            dom::set_text(document, CAMERA_STATUS_ID, text);
            show(document, CAMERA_STATUS_ID);
        }
        None => hide(document, CAMERA_STATUS_ID),
    }
}
