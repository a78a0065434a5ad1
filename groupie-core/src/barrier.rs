//! All-of-four fetch barrier for the artist detail screen
//!
//! The four requests are issued together and the join runs once, after every
//! one of them has settled. Any failure fails the whole wave; partial results
//! are discarded.

use futures::join;
use tracing::{debug, warn};

use crate::client::FetchError;
use crate::join::{assemble, ArtistDetail};
use crate::models::ArtistId;
use crate::source::CatalogSource;

pub async fn load_artist_detail<S>(source: &S, id: ArtistId) -> Result<ArtistDetail, FetchError>
where
    S: CatalogSource + ?Sized,
{
    debug!("Loading detail for artist {id}");

    let (artist, locations, dates, relations) = join!(
        source.artist(id),
        source.locations(),
        source.dates(),
        source.relations()
    );

    for (what, err) in [
        ("artist", artist.as_ref().err()),
        ("locations", locations.as_ref().err()),
        ("dates", dates.as_ref().err()),
        ("relations", relations.as_ref().err()),
    ] {
        if let Some(err) = err {
            warn!("Fetching {what} for artist {id} failed: {err}");
        }
    }

    // First failure in request order wins.
    let artist = artist?;
    let locations = locations?;
    let dates = dates?;
    let relations = relations?;

    debug!("All four requests for artist {id} settled, joining");
    Ok(assemble(artist, &locations, &dates, &relations))
}


#[cfg(test)]
mod tests {
    use super::fake::{Endpoint, FakeCatalog};
    use super::*;
    use crate::client::FetchErrorKind;

    #[tokio::test]
    async fn joins_all_four_for_present_artist() {
        let catalog = FakeCatalog::sample();

        let detail = load_artist_detail(&catalog, 3).await.unwrap();

        assert_eq!(detail.artist.name, "Pink Floyd");
        assert_eq!(detail.locations, vec!["osaka-japan", "nagoya-japan"]);
        assert_eq!(detail.dates, vec!["*28-01-2020", "30-01-2019"]);
        assert_eq!(detail.relations["30-01-2019"], vec!["nagoya-japan"]);
        assert_eq!(catalog.calls(), 4);
    }

    #[tokio::test]
    async fn artist_without_records_gets_empty_tour_data() {
        let catalog = FakeCatalog::sample();

        let detail = load_artist_detail(&catalog, 2).await.unwrap();

        assert_eq!(detail.artist.name, "Blur");
        assert!(detail.locations.is_empty());
        assert!(detail.dates.is_empty());
        assert!(detail.relations.is_empty());
    }

    #[tokio::test]
    async fn any_single_failure_fails_the_wave() {
        for endpoint in [
            Endpoint::Artist,
            Endpoint::Locations,
            Endpoint::Dates,
            Endpoint::Relations,
        ] {
            let catalog = FakeCatalog::sample();
            catalog.fail(endpoint);

            let err = load_artist_detail(&catalog, 1).await.unwrap_err();
            assert_eq!(err.kind(), FetchErrorKind::Network, "{endpoint:?}");
        }
    }

    #[tokio::test]
    async fn waits_for_every_request_even_after_a_failure() {
        let catalog = FakeCatalog::sample();
        catalog.fail(Endpoint::Artist);

        assert!(load_artist_detail(&catalog, 1).await.is_err());

        let mut settled = catalog.settled();
        settled.sort_by_key(|e| *e as u8);
        assert_eq!(
            settled,
            vec![
                Endpoint::Artist,
                Endpoint::Locations,
                Endpoint::Dates,
                Endpoint::Relations
            ]
        );
    }

    #[tokio::test]
    async fn unknown_artist_is_an_error() {
        let catalog = FakeCatalog::sample();
        let err = load_artist_detail(&catalog, 99).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn reports_first_failure_in_request_order() {
        let catalog = FakeCatalog::sample();
        catalog.fail(Endpoint::Relations);
        catalog.fail(Endpoint::Locations);

        let err = load_artist_detail(&catalog, 1).await.unwrap_err();
        assert!(err.to_string().contains("Locations"));
    }
}
