//! Reusable button component

use dioxus::prelude::*;

/// Unstyled button that carries the accessibility attributes and the click
/// plumbing. `Button` and the icon-only buttons build on it.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.map(|open| if open { "true" } else { "false" }),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background, for the selected tab and primary actions
    Primary,
    /// Gray background, for unselected tabs
    Secondary,
    /// No background, text only with hover
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

/// Button with the app's rounded, indigo-accented styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center gap-2 rounded-lg transition-colors";

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-500 text-white hover:bg-indigo-400",
        ButtonVariant::Secondary => "bg-gray-800 text-gray-300 hover:bg-gray-700",
        ButtonVariant::Ghost => "text-gray-300 hover:text-white hover:bg-gray-800",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            aria_label,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
