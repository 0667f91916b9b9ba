//! Small browser utilities shared by the components.
//!
//! - **Feedback**: transient toasts for successful saves, blocking alerts for
//!   failed deletes, and the confirm prompt guarding deletes.
//! - **Formatting**: thousands separators for collection counts.

use num_format::{Locale, ToFormattedString};

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3_000;

/// Flashes `message` in a `.toast` element after a create or update.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toast.remove();
    });
}

/// Native confirm prompt. Anything but an explicit "OK" counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Native blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}
