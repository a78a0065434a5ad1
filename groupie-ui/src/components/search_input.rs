//! Search box for the artist list

use crate::components::icons::SearchIcon;
use dioxus::prelude::*;

#[component]
pub fn SearchInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search artists...")] placeholder: &'static str,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        div { class: "relative",
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 pointer-events-none",
                SearchIcon { class: "w-5 h-5" }
            }
            input {
                r#type: "search",
                class: "w-full pl-10 pr-4 py-2 bg-gray-800 border border-gray-700 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent outline-none transition-all",
                "data-testid": "artist-search",
                aria_label: "Search artists",
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}
