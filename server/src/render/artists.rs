use axum::response::Html;

use super::{escape, opt, page, start_time, Format, venues::search};
use crate::view::{ArtistDetail, ArtistListing, SearchResults, VenueShow};

pub fn artist_search(term: &str, results: &SearchResults) -> Html<String> {
    search("artists", "Artist Search", term, results)
}

pub fn artist_list(artists: &[ArtistListing]) -> Html<String> {
    let items: String = artists
        .iter()
        .map(|a| {
            format!(
                "<li><a href=\"/artists/{}\">{}</a></li>\n",
                a.id,
                escape(&a.name)
            )
        })
        .collect();
    page("Artists", None, &format!("<h1>Artists</h1>\n<ul>\n{}</ul>", items))
}

fn show_items(shows: &[VenueShow]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<li><img src="{img}" alt=""><a href="/venues/{id}">{name}</a> {time}</li>"#,
                img = opt(s.venue_image_link.as_ref()),
                id = s.venue_id,
                name = escape(&s.venue_name),
                time = start_time(s.start_time.as_ref(), Format::Full),
            )
        })
        .collect()
}

pub fn artist_detail(flash: Option<&str>, detail: &ArtistDetail) -> Html<String> {
    let artist = &detail.artist;
    let genres: String = detail
        .genres
        .iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", escape(g)))
        .collect();
    let seeking = if artist.seeking_venue {
        format!(
            "<p class=\"seeking\">Currently seeking performance venues</p>\n<p>{}</p>",
            opt(artist.seeking_description.as_ref())
        )
    } else {
        "<p class=\"seeking\">Not currently seeking performance venues</p>".to_string()
    };
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
<p><a href="{website}">{website}</a></p>
<p><a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Artist Image">
<p><a href="/artists/{id}/edit">Edit</a></p>
<h2>{upcoming_count} Upcoming Shows</h2>
<ul>{upcoming}</ul>
<h2>{past_count} Past Shows</h2>
<ul>{past}</ul>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genres,
        city = opt(artist.city.as_ref()),
        state = opt(artist.state.as_ref()),
        phone = opt(artist.phone.as_ref()),
        website = opt(artist.website_link.as_ref()),
        facebook = opt(artist.facebook_link.as_ref()),
        seeking = seeking,
        image = opt(artist.image_link.as_ref()),
        upcoming_count = detail.shows.upcoming_shows_count(),
        upcoming = show_items(&detail.shows.upcoming),
        past_count = detail.shows.past_shows_count(),
        past = show_items(&detail.shows.past),
    );
    page(&artist.name, flash, &body)
}
