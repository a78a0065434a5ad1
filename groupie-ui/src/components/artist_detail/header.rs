use crate::components::icons::{CalendarIcon, DiscIcon, UsersIcon};
use dioxus::prelude::*;
use groupie_core::Artist;

/// Photo and key facts for an artist
#[component]
pub fn ArtistHeader(artist: Artist) -> Element {
    rsx! {
        div { class: "grid md:grid-cols-2 gap-8",
            div { class: "relative group",
                img {
                    src: "{artist.image}",
                    alt: "{artist.name}",
                    class: "w-full rounded-lg shadow-xl",
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-black/60 to-transparent rounded-lg opacity-0 group-hover:opacity-100 transition-opacity" }
            }

            div {
                h1 { class: "text-4xl font-bold mb-4", "{artist.name}" }

                div { class: "space-y-4",
                    div { class: "flex items-start gap-2",
                        span { class: "text-indigo-500 shrink-0 mt-1",
                            UsersIcon { class: "w-5 h-5" }
                        }
                        span { class: "text-gray-300 shrink-0 mt-1", "Members:" }
                        div { class: "flex flex-wrap gap-2",
                            for member in artist.members.iter() {
                                span { class: "text-sm px-2 py-1 bg-gray-800 rounded-full", "{member}" }
                            }
                        }
                    }
                    Fact { label: "Created:", value: artist.creation_date.to_string(),
                        CalendarIcon { class: "w-5 h-5" }
                    }
                    Fact { label: "First Album:", value: artist.first_album.clone(),
                        DiscIcon { class: "w-5 h-5" }
                    }
                }
            }
        }
    }
}

#[component]
fn Fact(label: &'static str, value: String, children: Element) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            span { class: "text-indigo-500", {children} }
            span { class: "text-gray-300", "{label}" }
            span { "{value}" }
        }
    }
}
