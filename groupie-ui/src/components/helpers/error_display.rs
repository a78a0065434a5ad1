//! Error display component

use dioxus::prelude::*;

/// Inline notice for a screen whose fetch failed
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "max-w-2xl mx-auto bg-red-900/40 border border-red-700/60 text-red-100 px-4 py-3 rounded-lg",
            p { "{message}" }
        }
    }
}
