use crate::constants::REDUCED_MOTION_QUERY;
use backdrop_core::Viewport;
use web_sys as web;

/// One-time read of the platform motion preference. Hosts without
/// `matchMedia` get normal motion.
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

/// Current logical viewport and device pixel ratio (capped by `Viewport`).
pub fn read_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32, window.device_pixel_ratio() as f32)
}

#[inline]
pub fn set_text_by_id(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_text_by_selector(document: &web::Document, selector: &str, text: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        el.set_text_content(Some(text));
    }
}
