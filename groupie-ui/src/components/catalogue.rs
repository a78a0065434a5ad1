//! Catalogue view - search box over a grid of artist cards

use crate::components::artist_card::ArtistCard;
use crate::components::search_input::SearchInput;
use dioxus::prelude::*;
use groupie_core::{Artist, ArtistId};

/// Artist grid for an already loaded catalogue (pure, props-based)
///
/// `artists` is the filtered list; `total` is the size of the full catalogue.
#[component]
pub fn CatalogueView(
    artists: Vec<Artist>,
    total: usize,
    query: String,
    on_query_change: EventHandler<String>,
    on_artist_click: EventHandler<ArtistId>,
) -> Element {
    let filtering = !query.is_empty();

    rsx! {
        div {
            div { class: "max-w-2xl mx-auto mb-8",
                SearchInput { value: query.clone(), on_input: on_query_change, autofocus: true }
                if filtering {
                    p { class: "mt-2 text-sm text-gray-400",
                        "Showing {artists.len()} of {total} artists"
                    }
                }
            }

            if artists.is_empty() {
                div { class: "text-center text-gray-400 py-16",
                    if filtering {
                        "No artists match \"{query}\""
                    } else {
                        "No artists yet"
                    }
                }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                    for artist in artists {
                        ArtistCard {
                            key: "{artist.id}",
                            artist: artist.clone(),
                            on_click: on_artist_click,
                        }
                    }
                }
            }
        }
    }
}
