//! Small DOM utilities shared by the components.

use gloo_timers::future::TimeoutFuture;

/// How long a notification stays on screen.
const TOAST_MILLIS: u32 = 6000;

/// Shows a success notification at the bottom of the screen for
/// [`TOAST_MILLIS`]. Look and placement come from the `.toast` rules in
/// `styles.css`. Does nothing if the document is unavailable.
pub fn show_toast(message: &str) {
    if mount_toast(message).is_none() {
        gloo_console::warn!("Could not show notification");
    }
}

fn mount_toast(message: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let body = document.body()?;
    let toast = document.create_element("div").ok()?;
    toast.set_class_name("toast toast-success");
    toast.set_attribute("role", "status").ok()?;
    toast.set_text_content(Some(message));
    body.append_child(&toast).ok()?;

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOAST_MILLIS).await;
        toast.remove();
    });
    Some(())
}

/// Logs a failed action to the browser console. Nothing is shown to the user.
pub fn log_error(context: &str, error: impl std::fmt::Display) {
    gloo_console::error!(format!("{}: {}", context, error));
}
