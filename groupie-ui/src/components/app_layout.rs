//! App layout view component

use dioxus::prelude::*;

/// App layout view (pure, props-based)
///
/// Navbar on top, routed content in a centered container.
#[component]
pub fn AppLayoutView(
    navbar: Element,
    /// Main content (typically the router outlet)
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-900 to-gray-800 text-white",
            {navbar}
            main { class: "container mx-auto px-4 py-8", {children} }
        }
    }
}
