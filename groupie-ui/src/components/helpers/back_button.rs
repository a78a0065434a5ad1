//! Back button component

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Back button with customizable text and callback
#[component]
pub fn BackButton(
    /// Text to display (default: "Back to Artists")
    #[props(default = "Back to Artists".to_string())]
    text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mb-6",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                class: Some("-ml-3".to_string()),
                onclick: move |_| on_click.call(()),
                ArrowLeftIcon { class: "w-5 h-5" }
                "{text}"
            }
        }
    }
}
