use axum::response::Html;
use entity::{Artist, Genres, Venue};

use super::{escape, opt, page};
use crate::view::format_start_time;

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

fn text(name: &str, label: &str, value: Option<&String>) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">
"#,
        name = name,
        label = label,
        value = opt(value),
    )
}

fn genres(selected: &Genres) -> String {
    let options: String = GENRES
        .iter()
        .map(|g| {
            let attr = if selected.contains(g) { " selected" } else { "" };
            format!(
                "<option value=\"{0}\"{1}>{0}</option>\n",
                escape(g),
                attr
            )
        })
        .collect();
    format!(
        "<label for=\"genres\">Genres</label>\n<select id=\"genres\" name=\"genres\" multiple>\n{}</select>\n",
        options
    )
}

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>
"#,
        name,
        if checked { " checked" } else { "" },
        label
    )
}

fn form(title: &str, action: &str, flash: Option<&str>, fields: &str) -> Html<String> {
    page(
        title,
        flash,
        &format!(
            r#"<h1>{title}</h1>
<form method="post" action="{action}">
{fields}<button type="submit">{title}</button>
</form>"#,
            title = escape(title),
            action = action,
            fields = fields,
        ),
    )
}

/// Create form when `venue` is empty, prefilled edit form otherwise.
pub fn venue_form(venue: Option<&Venue>, flash: Option<&str>) -> Html<String> {
    let field = |f: fn(&Venue) -> Option<&String>| venue.and_then(f);
    let mut fields = String::new();
    fields.push_str(&text("name", "Name", venue.map(|v| &v.name)));
    fields.push_str(&text("city", "City", field(|v| v.city.as_ref())));
    fields.push_str(&text("state", "State", field(|v| v.state.as_ref())));
    fields.push_str(&text("address", "Address", field(|v| v.address.as_ref())));
    fields.push_str(&text("phone", "Phone", field(|v| v.phone.as_ref())));
    fields.push_str(&text(
        "image_link",
        "Image Link",
        field(|v| v.image_link.as_ref()),
    ));
    fields.push_str(&genres(
        &venue.map(Venue::genre_list).unwrap_or_default(),
    ));
    fields.push_str(&text(
        "facebook_link",
        "Facebook Link",
        field(|v| v.facebook_link.as_ref()),
    ));
    fields.push_str(&text(
        "website_link",
        "Website",
        field(|v| v.website.as_ref()),
    ));
    fields.push_str(&checkbox(
        "seeking_talent",
        "Looking for talent",
        venue.map_or(false, |v| v.seeking_talent),
    ));
    fields.push_str(&text(
        "seeking_description",
        "Seeking Description",
        field(|v| v.seeking_description.as_ref()),
    ));

    match venue {
        Some(v) => form(
            "Edit venue",
            &format!("/venues/{}/edit", v.id),
            flash,
            &fields,
        ),
        None => form("List a new venue", "/venues/create", flash, &fields),
    }
}

pub fn artist_form(artist: Option<&Artist>, flash: Option<&str>) -> Html<String> {
    let field = |f: fn(&Artist) -> Option<&String>| artist.and_then(f);
    let mut fields = String::new();
    fields.push_str(&text("name", "Name", artist.map(|a| &a.name)));
    fields.push_str(&text("city", "City", field(|a| a.city.as_ref())));
    fields.push_str(&text("state", "State", field(|a| a.state.as_ref())));
    fields.push_str(&text("phone", "Phone", field(|a| a.phone.as_ref())));
    fields.push_str(&text(
        "image_link",
        "Image Link",
        field(|a| a.image_link.as_ref()),
    ));
    fields.push_str(&genres(
        &artist.map(Artist::genre_list).unwrap_or_default(),
    ));
    fields.push_str(&text(
        "facebook_link",
        "Facebook Link",
        field(|a| a.facebook_link.as_ref()),
    ));
    fields.push_str(&text(
        "website_link",
        "Website",
        field(|a| a.website_link.as_ref()),
    ));
    fields.push_str(&checkbox(
        "seeking_venue",
        "Looking for venues",
        artist.map_or(false, |a| a.seeking_venue),
    ));
    fields.push_str(&text(
        "seeking_description",
        "Seeking Description",
        field(|a| a.seeking_description.as_ref()),
    ));

    match artist {
        Some(a) => form(
            "Edit artist",
            &format!("/artists/{}/edit", a.id),
            flash,
            &fields,
        ),
        None => form("List a new artist", "/artists/create", flash, &fields),
    }
}

pub fn show_form() -> Html<String> {
    let now = format_start_time(&crate::view::now());
    let fields = format!(
        r#"<label for="artist_id">Artist ID</label>
<input type="text" id="artist_id" name="artist_id">
<label for="venue_id">Venue ID</label>
<input type="text" id="venue_id" name="venue_id">
<label for="start_time">Start Time (UTC)</label>
<input type="text" id="start_time" name="start_time" value="{}">
"#,
        now
    );
    form("List a new show", "/shows/create", None, &fields)
}
