mod artist_details;
mod home;
mod layout;
mod not_found;

pub use artist_details::ArtistDetails;
pub use home::Home;
pub use layout::AppLayout;
pub use not_found::NotFound;
