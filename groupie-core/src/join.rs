//! Per-artist join over the independently fetched collections
//!
//! Each collection is searched for the record whose id equals the artist's.
//! A missing record means "nothing known", not an error. If a collection
//! contains the same id twice, the first one in response order wins.

use crate::models::{Artist, ArtistId, DateRecord, DatesLocations, LocationRecord, RelationRecord};

/// Screen-ready view of one artist with its tour data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub locations: Vec<String>,
    pub dates: Vec<String>,
    pub relations: DatesLocations,
}

impl ArtistDetail {
    /// Every known concert as `(date, venues)`.
    ///
    /// Dates from the date record come first, in their order and spelled as
    /// received. Relation dates with no date record follow in key order.
    pub fn concerts(&self) -> Vec<(&str, Vec<String>)> {
        let mut concerts: Vec<(&str, Vec<String>)> = self
            .dates
            .iter()
            .map(|date| (date.as_str(), self.venues_on(date)))
            .collect();

        for (date, venues) in &self.relations {
            if !concerts.iter().any(|(listed, _)| bare_date(listed) == date.as_str()) {
                concerts.push((date.as_str(), venues.clone()));
            }
        }
        concerts
    }

    /// Locations played on `date`, which may carry the upstream `*` marker.
    pub fn venues_on(&self, date: &str) -> Vec<String> {
        self.relations
            .get(bare_date(date))
            .cloned()
            .unwrap_or_default()
    }
}

/// `date` without the leading `*` some upstream dates carry.
pub fn bare_date(date: &str) -> &str {
    date.trim().trim_start_matches('*')
}

pub fn locations_for(id: ArtistId, records: &[LocationRecord]) -> Vec<String> {
    records
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.locations.clone())
        .unwrap_or_default()
}

pub fn dates_for(id: ArtistId, records: &[DateRecord]) -> Vec<String> {
    records
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.dates.clone())
        .unwrap_or_default()
}

pub fn relations_for(id: ArtistId, records: &[RelationRecord]) -> DatesLocations {
    records
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.dates_locations.clone())
        .unwrap_or_default()
}

/// Join one artist with the full location, date and relation collections.
pub fn assemble(
    artist: Artist,
    locations: &[LocationRecord],
    dates: &[DateRecord],
    relations: &[RelationRecord],
) -> ArtistDetail {
    let id = artist.id;
    ArtistDetail {
        locations: locations_for(id, locations),
        dates: dates_for(id, dates),
        relations: relations_for(id, relations),
        artist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: ArtistId, name: &str) -> Artist {
        Artist {
            id,
            image: format!("{id}.jpeg"),
            name: name.to_string(),
            members: vec![],
            creation_date: 1990,
            first_album: "01-01-1991".into(),
            locations: None,
            concert_dates: None,
            relations: None,
        }
    }

    fn location(id: ArtistId, places: &[&str]) -> LocationRecord {
        LocationRecord {
            id,
            locations: places.iter().map(|p| p.to_string()).collect(),
            dates: None,
            name: None,
        }
    }

    fn date(id: ArtistId, dates: &[&str]) -> DateRecord {
        DateRecord {
            id,
            dates: dates.iter().map(|d| d.to_string()).collect(),
            name: None,
        }
    }

    fn relation(id: ArtistId, entries: Vec<(&str, Vec<&str>)>) -> RelationRecord {
        RelationRecord {
            id,
            dates_locations: entries
                .into_iter()
                .map(|(d, places)| (d.to_string(), places.into_iter().map(String::from).collect()))
                .collect(),
            name: None,
        }
    }

    #[test]
    fn joins_matching_records_by_id() {
        let locations = vec![
            location(1, &["london-uk"]),
            location(3, &["osaka-japan", "nagoya-japan"]),
        ];
        let dates = vec![date(3, &["*28-01-2020", "30-01-2019"]), date(1, &["*05-12-2019"])];
        let relations = vec![
            relation(1, vec![("05-12-2019", vec!["london-uk"])]),
            relation(
                3,
                vec![("28-01-2020", vec!["osaka-japan"]), ("30-01-2019", vec!["nagoya-japan"])],
            ),
        ];

        let detail = assemble(artist(3, "Pink Floyd"), &locations, &dates, &relations);

        assert_eq!(detail.artist.id, 3);
        assert_eq!(detail.locations, vec!["osaka-japan", "nagoya-japan"]);
        assert_eq!(detail.dates, vec!["*28-01-2020", "30-01-2019"]);
        assert_eq!(detail.relations.len(), 2);
        assert_eq!(detail.relations["28-01-2020"], vec!["osaka-japan"]);
    }

    #[test]
    fn missing_records_degrade_to_empty() {
        let locations = vec![location(1, &["london-uk"])];
        let dates = vec![date(1, &["05-12-2019"])];
        let relations = vec![relation(1, vec![("05-12-2019", vec!["london-uk"])])];

        let detail = assemble(artist(42, "Unknown"), &locations, &dates, &relations);

        assert!(detail.locations.is_empty());
        assert!(detail.dates.is_empty());
        assert!(detail.relations.is_empty());
    }

    #[test]
    fn empty_collections_degrade_to_empty() {
        let detail = assemble(artist(1, "Queen"), &[], &[], &[]);
        assert!(detail.locations.is_empty());
        assert!(detail.concerts().is_empty());
    }

    #[test]
    fn duplicate_ids_take_first_match() {
        let locations = vec![location(5, &["first"]), location(5, &["second"])];
        let dates = vec![date(5, &["a"]), date(5, &["b"])];

        assert_eq!(locations_for(5, &locations), vec!["first"]);
        assert_eq!(dates_for(5, &dates), vec!["a"]);
    }

    #[test]
    fn concerts_follow_date_record_and_match_marked_dates() {
        let dates = vec![date(2, &["*03-04-2020", "01-02-2020"])];
        let relations = vec![relation(
            2,
            vec![
                ("01-02-2020", vec!["paris-france"]),
                ("03-04-2020", vec!["berlin-germany", "bonn-germany"]),
            ],
        )];
        let detail = assemble(artist(2, "Blur"), &[], &dates, &relations);

        assert_eq!(
            detail.concerts(),
            vec![
                ("*03-04-2020", vec!["berlin-germany".to_string(), "bonn-germany".to_string()]),
                ("01-02-2020", vec!["paris-france".to_string()]),
            ]
        );
    }

    #[test]
    fn concerts_include_relation_dates_missing_from_date_record() {
        let dates = vec![date(2, &["01-02-2020", "09-09-2021"])];
        let relations = vec![relation(
            2,
            vec![("01-02-2020", vec!["paris-france"]), ("05-05-2019", vec!["lyon-france"])],
        )];
        let detail = assemble(artist(2, "Blur"), &[], &dates, &relations);

        let concerts = detail.concerts();
        let listed: Vec<&str> = concerts.iter().map(|(date, _)| *date).collect();
        assert_eq!(listed, vec!["01-02-2020", "09-09-2021", "05-05-2019"]);
        assert!(concerts[1].1.is_empty());
        assert_eq!(concerts[2].1, vec!["lyon-france"]);
    }

    #[test]
    fn venues_on_ignores_date_marker() {
        let relations = vec![relation(1, vec![("28-01-2020", vec!["osaka-japan"])])];
        let detail = assemble(artist(1, "Queen"), &[], &[], &relations);

        assert_eq!(detail.venues_on("*28-01-2020"), vec!["osaka-japan"]);
        assert_eq!(detail.venues_on("28-01-2020"), vec!["osaka-japan"]);
        assert!(detail.venues_on("29-01-2020").is_empty());
    }
}
