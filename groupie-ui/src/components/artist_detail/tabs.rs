use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use groupie_core::DetailTab;

/// Row of tab buttons where exactly one is selected
#[component]
pub fn DetailTabs(selected: DetailTab, on_select: EventHandler<DetailTab>) -> Element {
    rsx! {
        div { class: "flex gap-4 mb-6", role: "tablist",
            for tab in DetailTab::ALL {
                Button {
                    key: "{tab.key()}",
                    variant: if tab == selected { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    size: ButtonSize::Medium,
                    aria_label: Some(tab.label().to_string()),
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
