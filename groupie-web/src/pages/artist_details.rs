use crate::Route;
use dioxus::prelude::*;
use groupie_core::screen::DETAIL_FAILED_MESSAGE;
use groupie_core::{load_artist_detail, ApiClient, ArtistId, ArtistScreen, DetailTab, Phase, TaskScope};
use groupie_ui::{ArtistDetailView, BackButton, ErrorDisplay, ErrorToast, LoadingSpinner};

#[component]
pub fn ArtistDetails(id: ArtistId) -> Element {
    let client: ApiClient = use_context();
    let mut screen = use_signal(ArtistScreen::default);
    let scope = use_hook(TaskScope::new);

    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    // Re-runs the whole four-way load whenever the route id changes.
    use_effect(use_reactive!(|(id,)| {
        let scope = scope.clone();
        let client = client.clone();
        spawn(async move {
            let ticket = screen.write().begin_load(&scope, id);
            let outcome = load_artist_detail(&client, id).await;
            screen.write().settle(&ticket, outcome);
        });
    }));

    let state = screen.read();
    let toast = state.notification().map(|n| (n.id, n.message.clone()));

    let body = match state.phase() {
        Phase::Loading => rsx! {
            LoadingSpinner { message: "Loading artist..." }
        },
        Phase::Failed => rsx! {
            ErrorDisplay { message: DETAIL_FAILED_MESSAGE.to_string() }
        },
        Phase::Ready(detail) => rsx! {
            ArtistDetailView {
                detail: detail.clone(),
                tab: state.tab(),
                on_tab_select: move |tab: DetailTab| screen.write().select_tab(tab),
            }
        },
    };
    drop(state);

    rsx! {
        BackButton {
            on_click: move |_| {
                navigator().push(Route::Home {});
            },
        }
        {body}
        if let Some((id, message)) = toast {
            ErrorToast {
                key: "{id}",
                message,
                on_dismiss: move |_| {
                    screen.write().dismiss_notification(id);
                },
            }
        }
    }
}
