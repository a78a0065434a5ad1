//! Top navigation bar with a collapsible menu on narrow viewports

use crate::components::button::ChromelessButton;
use crate::components::icons::{MenuIcon, MusicIcon, XIcon};
use dioxus::prelude::*;

pub const API_DOCS_URL: &str = "https://groupietrackers.herokuapp.com/api";

const LINK_CLASS: &str = "text-gray-300 hover:text-white transition-colors";

/// Navbar view (pure, props-based)
///
/// The open/closed state of the mobile menu is owned by the caller.
#[component]
pub fn NavbarView(
    menu_open: bool,
    on_home: EventHandler<()>,
    on_toggle_menu: EventHandler<()>,
    /// Called when a link inside the mobile menu is followed
    on_close_menu: EventHandler<()>,
    #[props(default = API_DOCS_URL.to_string())] docs_url: String,
) -> Element {
    rsx! {
        nav { class: "bg-gray-900/50 backdrop-blur-sm border-b border-gray-800",
            div { class: "container mx-auto px-4",
                div { class: "flex justify-between items-center h-16",
                    a {
                        class: "flex items-center gap-2 text-xl font-bold cursor-pointer",
                        onclick: move |_| on_home.call(()),
                        MusicIcon { class: "h-6 w-6 text-indigo-500" }
                        span { "Groupie Tracker" }
                    }

                    ChromelessButton {
                        class: Some("md:hidden p-2 rounded-lg hover:bg-gray-800".to_string()),
                        aria_label: Some("Toggle menu".to_string()),
                        aria_expanded: Some(menu_open),
                        onclick: move |_| on_toggle_menu.call(()),
                        if menu_open {
                            XIcon { class: "w-6 h-6" }
                        } else {
                            MenuIcon { class: "w-6 h-6" }
                        }
                    }

                    div { class: "hidden md:flex items-center gap-6",
                        a {
                            class: "{LINK_CLASS} cursor-pointer",
                            onclick: move |_| on_home.call(()),
                            "Home"
                        }
                        a {
                            class: LINK_CLASS,
                            href: "{docs_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "API Docs"
                        }
                    }
                }

                if menu_open {
                    div { class: "md:hidden py-4", "data-testid": "mobile-menu",
                        div { class: "flex flex-col gap-4",
                            a {
                                class: "{LINK_CLASS} cursor-pointer",
                                onclick: move |_| {
                                    on_close_menu.call(());
                                    on_home.call(());
                                },
                                "Home"
                            }
                            a {
                                class: LINK_CLASS,
                                href: "{docs_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                onclick: move |_| on_close_menu.call(()),
                                "API Docs"
                            }
                        }
                    }
                }
            }
        }
    }
}
