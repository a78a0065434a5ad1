//! Artist detail view and its parts

mod header;
mod panels;
mod tabs;
mod view;

pub use header::ArtistHeader;
pub use panels::{DatesPanel, InfoPanel, LocationsPanel};
pub use tabs::DetailTabs;
pub use view::ArtistDetailView;
