//! Failure toast notification

use crate::components::button::ChromelessButton;
use crate::components::icons::XIcon;
use dioxus::prelude::*;
use tracing::debug;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u64 = 4000;

/// A dismissible error toast, pinned bottom-right.
///
/// Dismisses itself after `duration_ms`. Give each notification its own `key`
/// so a new message restarts the timer.
#[component]
pub fn ErrorToast(
    message: String,
    on_dismiss: EventHandler<()>,
    #[props(default = TOAST_DURATION_MS)] duration_ms: u64,
) -> Element {
    use_hook(move || {
        spawn(async move {
            sleep_ms(duration_ms).await;
            debug!("Toast timed out after {duration_ms}ms, dismissing");
            on_dismiss.call(());
        })
    });

    rsx! {
        div {
            class: "fixed bottom-4 right-4 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg flex items-center gap-3 z-50 max-w-md",
            role: "alert",
            "data-testid": "error-toast",
            p { class: "flex-1 font-medium", "{message}" }
            ChromelessButton {
                class: Some("text-red-200 hover:text-white".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(()),
                XIcon { class: "w-4 h-4" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
