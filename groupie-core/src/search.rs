use crate::models::Artist;

/// Artists whose name contains `query`, ignoring case, in their original order.
///
/// An empty query matches everything.
pub fn filter_artists<'a>(artists: &'a [Artist], query: &str) -> Vec<&'a Artist> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return artists.iter().collect();
    }

    artists
        .iter()
        .filter(|artist| artist.name.to_lowercase().contains(&needle))
        .collect()
}
