use crate::Route;
use dioxus::prelude::*;
use groupie_core::NavMenu;
use groupie_ui::{AppLayoutView, NavbarView};

#[component]
pub fn AppLayout() -> Element {
    let mut menu = use_signal(NavMenu::default);

    rsx! {
        AppLayoutView {
            navbar: rsx! {
                NavbarView {
                    menu_open: menu.read().is_open(),
                    on_home: move |_| {
                        navigator().push(Route::Home {});
                    },
                    on_toggle_menu: move |_| menu.write().toggle(),
                    on_close_menu: move |_| menu.write().close(),
                }
            },
            Outlet::<Route> {}
        }
    }
}
