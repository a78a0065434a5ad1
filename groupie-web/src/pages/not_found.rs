use crate::Route;
use dioxus::prelude::*;
use groupie_ui::BackButton;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        BackButton {
            on_click: move |_| {
                navigator().push(Route::Home {});
            },
        }
        div { class: "text-center text-gray-400 py-16",
            h1 { class: "text-2xl font-semibold text-white mb-2", "Page not found" }
            p { "Nothing lives at /{path}" }
        }
    }
}
