// Browser-specific playback and share plumbing, with inert native stubs.
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::playback::share_payload;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

pub const PLAYBACK_VIDEO_ID: &str = "vigiview-playback-video";

/// Outcome of the share control's two-branch selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet took the link. A dismissed or failed share
    /// is logged to the console, never retried via the clipboard.
    Shared,
    /// No share capability; the link landed on the clipboard.
    Copied,
    Failed(String),
    Unavailable,
}

#[cfg(target_arch = "wasm32")]
fn playback_video_element() -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(PLAYBACK_VIDEO_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

/// Point the modal's video element at `src`, reset it, and start playback.
#[cfg(target_arch = "wasm32")]
pub fn restart_playback(src: &str, autoplay: bool) {
    let Some(video) = playback_video_element() else {
        return;
    };
    video.set_src(src);
    video.load();
    if autoplay {
        if let Ok(promise) = video.play() {
            spawn(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn restart_playback(_src: &str, _autoplay: bool) {}

#[cfg(target_arch = "wasm32")]
fn navigator_share_fn(navigator: &web_sys::Navigator) -> Option<js_sys::Function> {
    let value = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("share")).ok()?;
    if value.is_function() {
        Some(value.unchecked_into())
    } else {
        None
    }
}

/// Share `url` through the platform share sheet when one exists, otherwise
/// copy it to the clipboard. The share branch never falls back to the
/// clipboard; a dismissed or failed share only ends up in the console.
#[cfg(target_arch = "wasm32")]
pub async fn share_or_copy_link(url: String) -> ShareOutcome {
    let Some(win) = window() else {
        return ShareOutcome::Failed("no window available".to_string());
    };
    let navigator = win.navigator();

    if let Some(share_fn) = navigator_share_fn(&navigator) {
        let payload = share_payload(&url);
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &data,
            &JsValue::from_str("title"),
            &JsValue::from_str(payload.title),
        );
        let _ = js_sys::Reflect::set(
            &data,
            &JsValue::from_str("text"),
            &JsValue::from_str(payload.text),
        );
        let _ = js_sys::Reflect::set(
            &data,
            &JsValue::from_str("url"),
            &JsValue::from_str(&payload.url),
        );

        let invoked = share_fn.call1(navigator.as_ref(), &JsValue::from(data));
        return match invoked {
            Ok(promise) => {
                let promise: js_sys::Promise = promise.unchecked_into();
                match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => {
                        web_sys::console::log_1(&JsValue::from_str("Recording link shared"));
                        ShareOutcome::Shared
                    }
                    Err(err) => {
                        web_sys::console::error_1(&err);
                        ShareOutcome::Shared
                    }
                }
            }
            Err(err) => {
                web_sys::console::error_1(&err);
                ShareOutcome::Failed("share invocation failed".to_string())
            }
        };
    }

    let clipboard = navigator.clipboard();
    match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&url)).await {
        Ok(_) => ShareOutcome::Copied,
        Err(_) => ShareOutcome::Failed("could not copy the link to the clipboard".to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn share_or_copy_link(_url: String) -> ShareOutcome {
    ShareOutcome::Unavailable
}
