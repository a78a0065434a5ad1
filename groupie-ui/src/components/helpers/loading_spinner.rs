//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Centered spinner shown while a screen is in its loading phase
#[component]
pub fn LoadingSpinner(
    /// Screen-reader text (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center min-h-[50vh]",
            role: "status",
            "data-testid": "loading-spinner",
            LoaderIcon { class: "w-8 h-8 animate-spin text-indigo-500" }
            span { class: "sr-only", "{message}" }
        }
    }
}
