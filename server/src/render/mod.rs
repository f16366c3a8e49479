//! Server-side HTML. Pages are assembled with `format!` and every value that
//! comes from the database or a request goes through [`escape`].

mod artists;
mod forms;
mod shows;
mod venues;

pub use artists::{artist_detail, artist_list, artist_search};
pub use forms::{artist_form, show_form, venue_form, GENRES};
pub use shows::show_list;
pub use venues::{venue_detail, venue_list, venue_search};

use axum::{http::StatusCode, response::Html};

use crate::view::format_start_time;
use time::{format_description::FormatItem, macros::format_description, PrimitiveDateTime};

const FULL: &[FormatItem<'static>] = format_description!(
    "[weekday] [month repr:long], [day padding:none], [year] at [hour repr:12 padding:none]:[minute][period]"
);
const MEDIUM: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month], [day], [year] [hour repr:12 padding:none]:[minute][period]"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `Saturday May, 21, 2019 at 9:30PM`
    Full,
    /// `Sat 05, 21, 2019 9:30PM`
    Medium,
}

pub fn format_datetime(value: &PrimitiveDateTime, format: Format) -> String {
    let description = match format {
        Format::Full => FULL,
        Format::Medium => MEDIUM,
    };
    value.format(description).unwrap_or_default()
}

/// `<time>` element for a show start. Shows without one render nothing.
pub(crate) fn start_time(value: Option<&PrimitiveDateTime>, format: Format) -> String {
    match value {
        Some(v) => format!(
            r#"<time datetime="{}">{}</time>"#,
            format_start_time(v),
            format_datetime(v, format)
        ),
        None => String::new(),
    }
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub(crate) fn opt(value: Option<&String>) -> String {
    value.map(|v| escape(v)).unwrap_or_default()
}

pub fn page(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let flash = match flash {
        Some(message) => format!(r#"<div class="alert">{}</div>"#, escape(message)),
        None => String::new(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Fyyur</title>
</head>
<body>
<nav>
<a href="/">Fyyur</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search"><input name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input name="search_term" placeholder="Find an artist"></form>
</nav>
{flash}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        flash = flash,
        body = body,
    ))
}

pub fn home(flash: Option<&str>) -> Html<String> {
    page(
        "Home",
        flash,
        r#"<h1>Fyyur</h1>
<p>Find and book upcoming shows.</p>
<ul>
<li><a href="/venues/create">List a venue</a></li>
<li><a href="/artists/create">List an artist</a></li>
<li><a href="/shows/create">List a show</a></li>
</ul>"#,
    )
}

pub fn error_page(status: StatusCode, detail: Option<&str>) -> Html<String> {
    let heading = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::INTERNAL_SERVER_ERROR => "Server Error",
        other => other.canonical_reason().unwrap_or("Error"),
    };
    let detail = detail
        .map(|d| format!("<p>{}</p>", escape(d)))
        .unwrap_or_default();
    page(
        heading,
        None,
        &format!(
            "<h1>{} {}</h1>\n{}",
            status.as_u16(),
            escape(heading),
            detail
        ),
    )
}
