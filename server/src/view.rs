//! View models handed to the renderer. Entities are never decorated with
//! derived fields, every page gets one of these instead.

use entity::{Artist, Genres, Show, Venue};
use itertools::Itertools;
use time::{
    format_description::FormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime,
};

const START_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

// accepted on show submission, first match wins
const INPUT_FORMATS: [&[FormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];

/// Wall-clock reference instant, in UTC like the stored start times.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

pub fn format_start_time(start_time: &PrimitiveDateTime) -> String {
    start_time.format(START_TIME_FORMAT).unwrap_or_default()
}

pub fn parse_start_time(input: &str) -> Option<PrimitiveDateTime> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(input, format).ok())
}

/// Case-insensitive substring match with full Unicode case folding on both
/// sides. The empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// A show without a start time can never be after `now`, so it counts as past.
pub fn is_upcoming(show: &Show, now: PrimitiveDateTime) -> bool {
    matches!(show.start_time, Some(start_time) if start_time > now)
}

pub fn num_upcoming_shows(shows: &[Show], now: PrimitiveDateTime) -> usize {
    shows.iter().filter(|s| is_upcoming(s, now)).count()
}

/// Splits shows (paired with whatever was loaded alongside them) into
/// upcoming and past, keeping the input order inside each half.
pub fn partition<T>(
    shows: Vec<(Show, T)>,
    now: PrimitiveDateTime,
) -> (Vec<(Show, T)>, Vec<(Show, T)>) {
    shows
        .into_iter()
        .partition(|(show, _)| is_upcoming(show, now))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shows<T> {
    pub upcoming: Vec<T>,
    pub past: Vec<T>,
}

impl<T> Shows<T> {
    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_shows_count(&self) -> usize {
        self.past.len()
    }
}

fn split<C, T, F>(shows: Vec<(Show, C)>, now: PrimitiveDateTime, f: F) -> Shows<T>
where
    F: Fn(Show, C) -> T,
{
    let (upcoming, past) = partition(shows, now);
    Shows {
        upcoming: upcoming.into_iter().map(|(s, c)| f(s, c)).collect(),
        past: past.into_iter().map(|(s, c)| f(s, c)).collect(),
    }
}

/// A show seen from its venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Option<PrimitiveDateTime>,
}

impl ArtistShow {
    pub fn new(show: Show, artist: Artist) -> Self {
        Self {
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time,
        }
    }
}

/// A show seen from its artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Option<PrimitiveDateTime>,
}

impl VenueShow {
    pub fn new(show: Show, venue: Venue) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub genres: Genres,
    pub shows: Shows<ArtistShow>,
}

pub fn venue_detail(
    venue: Venue,
    shows: Vec<(Show, Artist)>,
    now: PrimitiveDateTime,
) -> VenueDetail {
    VenueDetail {
        genres: venue.genre_list(),
        venue,
        shows: split(shows, now, ArtistShow::new),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub genres: Genres,
    pub shows: Shows<VenueShow>,
}

pub fn artist_detail(
    artist: Artist,
    shows: Vec<(Show, Venue)>,
    now: PrimitiveDateTime,
) -> ArtistDetail {
    ArtistDetail {
        genres: artist.genre_list(),
        artist,
        shows: split(shows, now, VenueShow::new),
    }
}

/// Row of the venue listing and of both search pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
}

pub fn search_results(
    matches: impl IntoIterator<Item = (i32, String, Vec<Show>)>,
    now: PrimitiveDateTime,
) -> SearchResults {
    let data: Vec<Summary> = matches
        .into_iter()
        .map(|(id, name, shows)| Summary {
            id,
            name,
            num_upcoming_shows: num_upcoming_shows(&shows, now),
        })
        .collect();
    SearchResults {
        count: data.len(),
        data,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Groups venues by (city, state). Areas come out sorted, venues keep their
/// input order within an area.
pub fn areas(venues: Vec<(Venue, Vec<Show>)>, now: PrimitiveDateTime) -> Vec<Area> {
    let grouped = venues
        .into_iter()
        .map(|(venue, shows)| {
            let key = (
                venue.city.clone().unwrap_or_default(),
                venue.state.clone().unwrap_or_default(),
            );
            let summary = Summary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows: num_upcoming_shows(&shows, now),
            };
            (key, summary)
        })
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .group_by(|(key, _)| key.clone());

    let areas = grouped
        .into_iter()
        .map(|((city, state), group)| Area {
            city,
            state,
            venues: group.map(|(_, summary)| summary).collect(),
        })
        .collect();
    areas
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistListing {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Option<PrimitiveDateTime>,
}

impl ShowListing {
    pub fn new(show: Show, venue: Venue, artist: Artist) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: show.start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn show(id: i32, start_time: Option<PrimitiveDateTime>) -> Show {
        Show {
            id,
            artist_id: 1,
            venue_id: 1,
            start_time,
        }
    }

    fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            address: None,
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: Some("Jazz,Classical".to_string()),
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn artist(id: i32, name: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            city: None,
            state: None,
            phone: None,
            genres: None,
            image_link: Some(format!("https://img/{}", id)),
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let now = datetime!(2024-06-01 20:00:00);
        let shows = vec![
            (show(1, Some(datetime!(2024-05-01 20:00:00))), ()),
            (show(2, Some(datetime!(2035-04-01 20:00:00))), ()),
            (show(3, Some(datetime!(2019-05-21 21:30:00))), ()),
            (show(4, Some(datetime!(2024-06-01 20:00:01))), ()),
        ];
        let (upcoming, past) = partition(shows, now);
        let upcoming: Vec<i32> = upcoming.iter().map(|(s, _)| s.id).collect();
        let past: Vec<i32> = past.iter().map(|(s, _)| s.id).collect();
        assert_eq!(upcoming, vec![2, 4]);
        assert_eq!(past, vec![1, 3]);
    }

    #[test]
    fn show_starting_now_is_past() {
        let now = datetime!(2024-06-01 20:00:00);
        let (upcoming, past) = partition(vec![(show(1, Some(now)), ())], now);
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn show_without_start_time_is_past() {
        let now = datetime!(2024-06-01 20:00:00);
        assert!(!is_upcoming(&show(1, None), now));
        let (upcoming, past) = partition(vec![(show(1, None), ())], now);
        assert!(upcoming.is_empty());
        assert_eq!(past.len(), 1);
    }

    #[test]
    fn venue_detail_reshapes_shows_with_their_artist() {
        let now = datetime!(2024-06-01 20:00:00);
        let detail = venue_detail(
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            vec![
                (show(1, Some(datetime!(2019-05-21 21:30:00))), artist(4, "Guns N Petals")),
                (show(2, Some(datetime!(2035-04-01 20:00:00))), artist(6, "The Wild Sax Band")),
            ],
            now,
        );
        assert_eq!(detail.genres.0, vec!["Jazz", "Classical"]);
        assert_eq!(detail.shows.upcoming_shows_count(), 1);
        assert_eq!(detail.shows.past_shows_count(), 1);
        let past = &detail.shows.past[0];
        assert_eq!(past.artist_id, 4);
        assert_eq!(past.artist_name, "Guns N Petals");
        assert_eq!(past.artist_image_link.as_deref(), Some("https://img/4"));
        assert_eq!(
            past.start_time.as_ref().map(format_start_time).as_deref(),
            Some("2019-05-21T21:30:00")
        );
    }

    #[test]
    fn areas_group_by_city_and_state() {
        let now = datetime!(2024-06-01 20:00:00);
        let areas = areas(
            vec![
                (venue(1, "The Musical Hop", "San Francisco", "CA"), vec![]),
                (venue(2, "The Dueling Pianos Bar", "New York", "NY"), vec![]),
                (
                    venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
                    vec![show(1, Some(datetime!(2035-04-01 20:00:00)))],
                ),
            ],
            now,
        );
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "New York");
        assert_eq!(areas[1].city, "San Francisco");
        let ids: Vec<i32> = areas[1].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(areas[1].venues[1].num_upcoming_shows, 1);
    }

    #[test]
    fn search_count_matches_data() {
        let now = datetime!(2024-06-01 20:00:00);
        let results = search_results(
            vec![
                (1, "Park Square".to_string(), vec![]),
                (2, "Parkside".to_string(), vec![]),
            ],
            now,
        );
        assert_eq!(results.count, 2);
        assert_eq!(results.count, results.data.len());
    }

    #[test]
    fn names_match_ignoring_case() {
        assert!(name_matches("Park Square Live Music & Coffee", "pArK"));
        assert!(name_matches("ÉCLAIR HALL", "éclair"));
        assert!(name_matches("The Musical Hop", ""));
        assert!(!name_matches("The Musical Hop", "park"));
        assert!(!name_matches("The Musical Hop", "%"));
    }

    #[test]
    fn start_time_inputs_are_parsed() {
        let expected = datetime!(2019-05-21 21:30:00);
        assert_eq!(parse_start_time("2019-05-21 21:30:00"), Some(expected));
        assert_eq!(parse_start_time("2019-05-21T21:30:00"), Some(expected));
        assert_eq!(parse_start_time("2019-05-21T21:30"), Some(expected));
        assert_eq!(parse_start_time(" 2019-05-21 21:30 "), Some(expected));
        assert_eq!(parse_start_time("tomorrow"), None);
    }

    #[test]
    fn start_time_is_formatted_iso_like() {
        assert_eq!(
            format_start_time(&datetime!(2035-04-08 20:00:00)),
            "2035-04-08T20:00:00"
        );
    }
}
