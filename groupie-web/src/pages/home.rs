use crate::Route;
use dioxus::prelude::*;
use groupie_core::screen::LIST_FAILED_MESSAGE;
use groupie_core::{ApiClient, ArtistId, CatalogueScreen, Phase, TaskScope};
use groupie_ui::{CatalogueView, ErrorDisplay, ErrorToast, LoadingSpinner};

#[component]
pub fn Home() -> Element {
    let client: ApiClient = use_context();
    let mut screen = use_signal(CatalogueScreen::default);
    let scope = use_hook(TaskScope::new);

    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    use_effect(move || {
        let scope = scope.clone();
        let client = client.clone();
        spawn(async move {
            let ticket = screen.write().begin_load(&scope);
            let outcome = client.fetch_artists().await;
            screen.write().settle(&ticket, outcome);
        });
    });

    let state = screen.read();
    let toast = state.notification().map(|n| (n.id, n.message.clone()));

    let body = match state.phase() {
        Phase::Loading => rsx! {
            LoadingSpinner { message: "Loading artists..." }
        },
        Phase::Failed => rsx! {
            ErrorDisplay { message: LIST_FAILED_MESSAGE.to_string() }
        },
        Phase::Ready(all) => {
            let visible: Vec<_> = state.visible().into_iter().cloned().collect();
            rsx! {
                CatalogueView {
                    artists: visible,
                    total: all.len(),
                    query: state.query().to_string(),
                    on_query_change: move |query: String| screen.write().set_query(query),
                    on_artist_click: move |id: ArtistId| {
                        navigator().push(Route::ArtistDetails { id });
                    },
                }
            }
        }
    };
    drop(state);

    rsx! {
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
