//! Tab panels for the artist detail view

use crate::components::icons::{CalendarIcon, MapPinIcon};
use crate::components::utils::{format_concert_date, format_location};
use dioxus::prelude::*;
use groupie_core::Artist;

#[component]
pub fn InfoPanel(artist: Artist) -> Element {
    rsx! {
        div { class: "space-y-4",
            h2 { class: "text-2xl font-semibold mb-4", "About" }
            p { class: "text-gray-300",
                "{artist.name} was formed in {artist.creation_date}. The band released their first album \"{artist.first_album}\" and has since become a prominent name in the music industry."
            }
        }
    }
}

#[component]
pub fn LocationsPanel(locations: Vec<String>) -> Element {
    rsx! {
        div {
            h2 { class: "text-2xl font-semibold mb-4", "Tour Locations" }
            if locations.is_empty() {
                EmptyPanel { message: "No tour locations on record" }
            } else {
                div { class: "grid md:grid-cols-2 gap-4",
                    for location in locations.iter() {
                        div { class: "flex items-center gap-2 bg-gray-700/30 p-3 rounded-lg",
                            span { class: "text-indigo-500",
                                MapPinIcon { class: "w-5 h-5" }
                            }
                            span { title: "{location}", "{format_location(location)}" }
                        }
                    }
                }
            }
        }
    }
}

/// Concert dates, each with the locations played on that date when known
///
/// `concerts` comes from `ArtistDetail::concerts`.
#[component]
pub fn DatesPanel(concerts: Vec<(String, Vec<String>)>) -> Element {
    rsx! {
        div {
            h2 { class: "text-2xl font-semibold mb-4", "Upcoming Concerts" }
            if concerts.is_empty() {
                EmptyPanel { message: "No concert dates on record" }
            } else {
                div { class: "grid md:grid-cols-2 gap-4",
                    for (date, venues) in concerts.iter() {
                        ConcertDate { date: date.clone(), venues: venues.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ConcertDate(date: String, venues: Vec<String>) -> Element {
    let venue_line = venues
        .iter()
        .map(|v| format_location(v))
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div { class: "flex items-start gap-2 bg-gray-700/30 p-3 rounded-lg",
            span { class: "text-indigo-500 mt-0.5",
                CalendarIcon { class: "w-5 h-5" }
            }
            div {
                span { title: "{date}", "{format_concert_date(&date)}" }
                if !venues.is_empty() {
                    p { class: "text-sm text-gray-400", "{venue_line}" }
                }
            }
        }
    }
}

#[component]
fn EmptyPanel(message: &'static str) -> Element {
    rsx! {
        p { class: "text-gray-400", "{message}" }
    }
}
