//! Shared UI components

pub mod app_layout;
pub mod artist_card;
pub mod artist_detail;
pub mod button;
pub mod catalogue;
pub mod error_toast;
pub mod helpers;
pub mod icons;
pub mod navbar;
pub mod search_input;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use artist_card::ArtistCard;
pub use artist_detail::{
    ArtistDetailView, ArtistHeader, DatesPanel, DetailTabs, InfoPanel, LocationsPanel,
};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use catalogue::CatalogueView;
pub use error_toast::{ErrorToast, TOAST_DURATION_MS};
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner};
pub use icons::{
    ArrowLeftIcon, CalendarIcon, DiscIcon, ImageIcon, LoaderIcon, MapPinIcon, MenuIcon, MusicIcon,
    SearchIcon, UsersIcon, XIcon,
};
pub use navbar::{NavbarView, API_DOCS_URL};
pub use search_input::SearchInput;
pub use utils::{format_concert_date, format_location, member_preview};
