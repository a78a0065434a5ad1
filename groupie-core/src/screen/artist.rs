//! Artist detail screen state

use tracing::{debug, info, warn};

use super::{dismiss, Notification, Phase};
use crate::client::FetchError;
use crate::join::ArtistDetail;
use crate::models::ArtistId;
use crate::scope::{TaskScope, Ticket};

pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch artist details";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DetailTab {
    #[default]
    Info,
    Locations,
    Dates,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Info, DetailTab::Locations, DetailTab::Dates];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Info => "Info",
            DetailTab::Locations => "Locations",
            DetailTab::Dates => "Concert Dates",
        }
    }

    /// Stable key, used to key the tab buttons.
    pub fn key(self) -> &'static str {
        match self {
            DetailTab::Info => "info",
            DetailTab::Locations => "locations",
            DetailTab::Dates => "dates",
        }
    }
}

/// State for the artist detail screen.
///
/// The selected tab survives a change of artist id. Switching tabs is local
/// and never triggers a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistScreen {
    artist_id: Option<ArtistId>,
    phase: Phase<ArtistDetail>,
    tab: DetailTab,
    notification: Option<Notification>,
}

impl ArtistScreen {
    /// Start loading `id`. Any wave still in flight for an earlier id is superseded.
    pub fn begin_load(&mut self, scope: &TaskScope, id: ArtistId) -> Ticket {
        self.artist_id = Some(id);
        self.phase = Phase::Loading;
        scope.issue()
    }

    pub fn settle(&mut self, ticket: &Ticket, outcome: Result<ArtistDetail, FetchError>) -> bool {
        if !ticket.is_current() {
            debug!("Dropping stale detail result for artist {:?}", self.artist_id);
            return false;
        }

        match outcome {
            Ok(detail) => {
                info!("Loaded artist {} ({})", detail.artist.id, detail.artist.name);
                self.phase = Phase::Ready(detail);
            }
            Err(e) => {
                warn!("Failed to fetch artist {:?}: {e}", self.artist_id);
                self.phase = Phase::Failed;
                self.notification = Some(Notification::new(DETAIL_FAILED_MESSAGE));
            }
        }
        true
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn artist_id(&self) -> Option<ArtistId> {
        self.artist_id
    }

    pub fn phase(&self) -> &Phase<ArtistDetail> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn detail(&self) -> Option<&ArtistDetail> {
        self.phase.ready()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        dismiss(&mut self.notification, id)
    }
}
