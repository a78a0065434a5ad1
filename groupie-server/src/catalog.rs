//! In-memory catalogue served by the API

use std::collections::HashMap;

use futures::try_join;
use groupie_core::{
    filter_artists, Artist, ArtistId, CatalogSource, DateRecord, FetchError, LocationRecord,
    RelationRecord,
};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationRecord>,
    pub dates: Vec<DateRecord>,
    pub relations: Vec<RelationRecord>,
}

impl Catalog {
    /// Fetch all four collections concurrently. Fails on the first error.
    pub async fn fetch<S>(source: &S) -> Result<Self, FetchError>
    where
        S: CatalogSource + ?Sized,
    {
        let (artists, locations, dates, relations) = try_join!(
            source.artists(),
            source.locations(),
            source.dates(),
            source.relations()
        )?;

        info!(
            "fetched {} artists, {} location, {} date and {} relation records",
            artists.len(),
            locations.len(),
            dates.len(),
            relations.len()
        );

        Ok(Self {
            artists,
            locations,
            dates,
            relations,
        })
    }

    /// Fill in every record's `name` from its owning artist. Records with no
    /// matching artist get no name.
    pub fn with_artist_names(mut self) -> Self {
        let names: HashMap<ArtistId, &str> = self
            .artists
            .iter()
            .map(|a| (a.id, a.name.as_str()))
            .collect();
        let name_of = |id: ArtistId| names.get(&id).map(|n| n.to_string());

        for record in &mut self.locations {
            record.name = name_of(record.id);
        }
        for record in &mut self.dates {
            record.name = name_of(record.id);
        }
        for record in &mut self.relations {
            record.name = name_of(record.id);
        }
        self
    }

    /// First artist with `id`.
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn search(&self, query: &str) -> Vec<&Artist> {
        filter_artists(&self.artists, query)
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::catalog;
    use super::*;

    #[test]
    fn names_are_filled_from_artists() {
        let catalog = catalog().with_artist_names();

        assert_eq!(catalog.locations[0].name.as_deref(), Some("Queen"));
        assert_eq!(catalog.locations[1].name.as_deref(), Some("Pink Floyd"));
        assert_eq!(catalog.dates[0].name.as_deref(), Some("Pink Floyd"));
        assert_eq!(catalog.relations[0].name.as_deref(), Some("Pink Floyd"));
    }

    #[test]
    fn orphan_records_get_no_name() {
        let mut catalog = catalog();
        catalog.dates.push(DateRecord {
            id: 42,
            dates: vec![],
            name: Some("stale".to_string()),
        });

        let catalog = catalog.with_artist_names();
        assert_eq!(catalog.dates[1].name, None);
    }

    #[test]
    fn lookup_and_search() {
        let catalog = catalog();
        assert_eq!(catalog.artist(2).map(|a| a.name.as_str()), Some("Blur"));
        assert!(catalog.artist(9).is_none());

        let found: Vec<ArtistId> = catalog.search("FLOYD").iter().map(|a| a.id).collect();
        assert_eq!(found, vec![3]);
    }
}
