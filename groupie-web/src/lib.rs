pub mod api;
pub mod pages;

use dioxus::prelude::*;
use groupie_core::ArtistId;
use pages::{AppLayout, ArtistDetails, Home, NotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/artist/:id")]
    ArtistDetails { id: ArtistId },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(api::client);

    rsx! {
        document::Title { "Groupie Tracker" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}
