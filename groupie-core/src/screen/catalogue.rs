//! Artist list screen state

use tracing::{debug, info, warn};

use super::{dismiss, Notification, Phase};
use crate::client::FetchError;
use crate::models::Artist;
use crate::scope::{TaskScope, Ticket};
use crate::search::filter_artists;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch artists";

/// State for the artist list screen.
///
/// Search is synchronous over the already fetched list; changing the query
/// never re-enters [`Phase::Loading`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueScreen {
    phase: Phase<Vec<Artist>>,
    query: String,
    notification: Option<Notification>,
}

impl CatalogueScreen {
    pub fn begin_load(&mut self, scope: &TaskScope) -> Ticket {
        self.phase = Phase::Loading;
        scope.issue()
    }

    /// Commit a fetch outcome. Returns `false` (and changes nothing) for a stale ticket.
    pub fn settle(&mut self, ticket: &Ticket, outcome: Result<Vec<Artist>, FetchError>) -> bool {
        if !ticket.is_current() {
            debug!("Dropping stale artist list result");
            return false;
        }

        match outcome {
            Ok(artists) => {
                info!("Loaded {} artists", artists.len());
                self.phase = Phase::Ready(artists);
            }
            Err(e) => {
                warn!("Failed to fetch artists: {e}");
                self.phase = Phase::Failed;
                self.notification = Some(Notification::new(LIST_FAILED_MESSAGE));
            }
        }
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase<Vec<Artist>> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Every fetched artist, ignoring the query.
    pub fn artists(&self) -> &[Artist] {
        self.phase.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Fetched artists matching the current query.
    pub fn visible(&self) -> Vec<&Artist> {
        filter_artists(self.artists(), &self.query)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        dismiss(&mut self.notification, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrier::fake::{Endpoint, FakeCatalog};
    use crate::source::CatalogSource;

    async fn loaded(catalog: &FakeCatalog) -> CatalogueScreen {
        let scope = TaskScope::new();
        let mut screen = CatalogueScreen::default();
        let ticket = screen.begin_load(&scope);
        assert!(screen.settle(&ticket, catalog.artists().await));
        screen
    }

    #[test]
    fn starts_loading_with_nothing_visible() {
        let screen = CatalogueScreen::default();
        assert!(screen.is_loading());
        assert!(screen.visible().is_empty());
        assert_eq!(screen.notification(), None);
    }

    #[tokio::test]
    async fn successful_fetch_becomes_ready() {
        let catalog = FakeCatalog::sample();
        let screen = loaded(&catalog).await;

        assert!(!screen.is_loading());
        assert_eq!(screen.artists().len(), 3);
        assert_eq!(screen.visible().len(), 3);
    }

    #[tokio::test]
    async fn failed_fetch_clears_loading_and_notifies() {
        let catalog = FakeCatalog::sample();
        catalog.fail(Endpoint::Artists);
        let scope = TaskScope::new();
        let mut screen = CatalogueScreen::default();

        let ticket = screen.begin_load(&scope);
        assert!(screen.settle(&ticket, catalog.artists().await));

        assert!(!screen.is_loading());
        assert!(screen.phase().is_failed());
        assert!(screen.visible().is_empty());
        assert_eq!(screen.notification().unwrap().message, "Failed to fetch artists");
    }

    #[tokio::test]
    async fn query_filters_without_reloading() {
        let catalog = FakeCatalog::sample();
        let mut screen = loaded(&catalog).await;
        let calls = catalog.calls();

        screen.set_query("PINK");

        assert!(!screen.is_loading());
        assert_eq!(screen.query(), "PINK");
        let visible: Vec<u32> = screen.visible().iter().map(|a| a.id).collect();
        assert_eq!(visible, vec![3]);
        assert_eq!(catalog.calls(), calls);

        screen.set_query("");
        assert_eq!(screen.visible().len(), 3);
    }

    #[tokio::test]
    async fn query_typed_while_loading_applies_once_ready() {
        let catalog = FakeCatalog::sample();
        let scope = TaskScope::new();
        let mut screen = CatalogueScreen::default();
        let ticket = screen.begin_load(&scope);

        screen.set_query("bl");
        assert!(screen.visible().is_empty());

        screen.settle(&ticket, catalog.artists().await);
        let names: Vec<&str> = screen.visible().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Blur"]);
    }

    #[tokio::test]
    async fn result_after_teardown_is_dropped() {
        let catalog = FakeCatalog::sample();
        let scope = TaskScope::new();
        let mut screen = CatalogueScreen::default();
        let ticket = screen.begin_load(&scope);

        scope.cancel();
        let committed = screen.settle(&ticket, catalog.artists().await);

        assert!(!committed);
        assert!(screen.is_loading());
        assert!(screen.artists().is_empty());
    }

    #[test]
    fn dismissing_notification_by_id() {
        let scope = TaskScope::new();
        let mut screen = CatalogueScreen::default();
        let ticket = screen.begin_load(&scope);
        screen.settle(
            &ticket,
            Err(FetchError::Status {
                status: 502,
                url: "http://x/artists".into(),
            }),
        );

        let id = screen.notification().unwrap().id;
        assert!(!screen.dismiss_notification(id + 1000));
        assert!(screen.dismiss_notification(id));
        assert_eq!(screen.notification(), None);
        assert!(screen.phase().is_failed());
    }
}
