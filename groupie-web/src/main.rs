use groupie_web::{api, App};

fn main() {
    dioxus::logger::initialize_default();

    if let Err(e) = api::install_config() {
        tracing::error!("Ignoring GROUPIE_API_URL: {e}");
    }

    dioxus::launch(App);
}
