use axum::response::Html;
use std::fmt::Write;

use super::{escape, opt, page, start_time, Format};
use crate::view::{Area, ArtistShow, SearchResults, Summary, VenueDetail};

fn summary_item(kind: &str, summary: &Summary) -> String {
    format!(
        r#"<li><a href="/{kind}/{id}">{name}</a> <small>{n} upcoming shows</small></li>"#,
        kind = kind,
        id = summary.id,
        name = escape(&summary.name),
        n = summary.num_upcoming_shows,
    )
}

pub(super) fn search(kind: &str, title: &str, term: &str, results: &SearchResults) -> Html<String> {
    let items: String = results
        .data
        .iter()
        .map(|s| summary_item(kind, s))
        .collect();
    page(
        title,
        None,
        &format!(
            "<h2>Number of search results for \"{}\": {}</h2>\n<ul>\n{}\n</ul>",
            escape(term),
            results.count,
            items
        ),
    )
}

pub fn venue_search(term: &str, results: &SearchResults) -> Html<String> {
    search("venues", "Venue Search", term, results)
}

pub fn venue_list(areas: &[Area]) -> Html<String> {
    let mut body = String::from("<h1>Venues</h1>\n");
    for area in areas {
        let _ = write!(
            body,
            "<h3>{}, {}</h3>\n<ul>\n",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            body.push_str(&summary_item("venues", venue));
            body.push('\n');
        }
        body.push_str("</ul>\n");
    }
    page("Venues", None, &body)
}

fn show_items(shows: &[ArtistShow]) -> String {
    shows
        .iter()
        .map(|s| {
            format!(
                r#"<li><img src="{img}" alt=""><a href="/artists/{id}">{name}</a> {time}</li>"#,
                img = opt(s.artist_image_link.as_ref()),
                id = s.artist_id,
                name = escape(&s.artist_name),
                time = start_time(s.start_time.as_ref(), Format::Full),
            )
        })
        .collect()
}

pub fn venue_detail(flash: Option<&str>, detail: &VenueDetail) -> Html<String> {
    let venue = &detail.venue;
    let genres: String = detail
        .genres
        .iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", escape(g)))
        .collect();
    let seeking = if venue.seeking_talent {
        format!(
            "<p class=\"seeking\">Currently seeking talent</p>\n<p>{}</p>",
            opt(venue.seeking_description.as_ref())
        )
    } else {
        "<p class=\"seeking\">Not currently seeking talent</p>".to_string()
    };
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{address}</p>
<p>{phone}</p>
<p><a href="{website}">{website}</a></p>
<p><a href="{facebook}">{facebook}</a></p>
{seeking}
<img src="{image}" alt="Venue Image">
<p><a href="/venues/{id}/edit">Edit</a></p>
<form method="post" action="/venues/{id}/delete"><button type="submit">Delete</button></form>
<h2>{upcoming_count} Upcoming Shows</h2>
<ul>{upcoming}</ul>
<h2>{past_count} Past Shows</h2>
<ul>{past}</ul>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genres,
        city = opt(venue.city.as_ref()),
        state = opt(venue.state.as_ref()),
        address = opt(venue.address.as_ref()),
        phone = opt(venue.phone.as_ref()),
        website = opt(venue.website.as_ref()),
        facebook = opt(venue.facebook_link.as_ref()),
        seeking = seeking,
        image = opt(venue.image_link.as_ref()),
        upcoming_count = detail.shows.upcoming_shows_count(),
        upcoming = show_items(&detail.shows.upcoming),
        past_count = detail.shows.past_shows_count(),
        past = show_items(&detail.shows.past),
    );
    page(&venue.name, flash, &body)
}
