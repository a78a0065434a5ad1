//! Artist card component - pure view with callbacks

use crate::components::icons::ImageIcon;
use crate::components::utils::{member_preview, CARD_MEMBER_LIMIT};
use dioxus::prelude::*;
use groupie_core::{Artist, ArtistId};

/// One artist in the catalogue grid
///
/// Navigation is handled via the on_click callback, not direct router calls.
#[component]
pub fn ArtistCard(artist: Artist, on_click: EventHandler<ArtistId>) -> Element {
    let id = artist.id;
    let (shown, hidden) = member_preview(&artist.members, CARD_MEMBER_LIMIT);

    let card_class = "group bg-gray-800/50 rounded-lg overflow-hidden cursor-pointer border border-gray-700/50 transition-all duration-300 hover:scale-105 hover:border-indigo-500/50 hover:shadow-lg hover:shadow-indigo-500/10";

    rsx! {
        div {
            class: card_class,
            "data-testid": "artist-card",
            onclick: move |_| on_click.call(id),
            div { class: "aspect-square overflow-hidden bg-gray-700 flex items-center justify-center",
                if artist.image.is_empty() {
                    ImageIcon { class: "w-12 h-12 text-gray-500" }
                } else {
                    img {
                        src: "{artist.image}",
                        alt: "{artist.name}",
                        class: "w-full h-full object-cover group-hover:scale-110 transition-transform duration-300",
                    }
                }
            }
            div { class: "p-4",
                h2 { class: "text-xl font-semibold mb-2 truncate", title: "{artist.name}",
                    "{artist.name}"
                }
                p { class: "text-gray-400 text-sm", "Created: {artist.creation_date}" }
                div { class: "mt-2 flex flex-wrap gap-2",
                    for member in shown {
                        span { class: "text-xs px-2 py-1 bg-gray-700/50 rounded-full", "{member}" }
                    }
                    if hidden > 0 {
                        span { class: "text-xs px-2 py-1 bg-gray-700/50 rounded-full", "+{hidden} more" }
                    }
                }
            }
        }
    }
}
