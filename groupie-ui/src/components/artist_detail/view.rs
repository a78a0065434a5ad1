use super::{ArtistHeader, DatesPanel, DetailTabs, InfoPanel, LocationsPanel};
use dioxus::prelude::*;
use groupie_core::{ArtistDetail, DetailTab};

/// Artist detail page body (pure, props-based)
///
/// Only the selected tab's panel is rendered. Tab changes are reported
/// through `on_tab_select`; the caller owns the selection.
#[component]
pub fn ArtistDetailView(
    detail: ArtistDetail,
    tab: DetailTab,
    on_tab_select: EventHandler<DetailTab>,
) -> Element {
    let artist = detail.artist.clone();
    let concerts: Vec<(String, Vec<String>)> = detail
        .concerts()
        .into_iter()
        .map(|(date, venues)| (date.to_string(), venues))
        .collect();

    rsx! {
        div { class: "max-w-4xl mx-auto", "data-testid": "artist-detail",
            ArtistHeader { artist: artist.clone() }

            div { class: "mt-8",
                DetailTabs { selected: tab, on_select: on_tab_select }

                div { class: "bg-gray-800/50 rounded-lg p-6",
                    match tab {
                        DetailTab::Info => rsx! {
                            InfoPanel { artist }
                        },
                        DetailTab::Locations => rsx! {
                            LocationsPanel { locations: detail.locations.clone() }
                        },
                        DetailTab::Dates => rsx! {
                            DatesPanel { concerts }
                        },
                    }
                }
            }
        }
    }
}
