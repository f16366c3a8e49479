use axum::response::Html;

use super::{escape, opt, page, start_time, Format};
use crate::view::ShowListing;

pub fn show_list(shows: &[ShowListing]) -> Html<String> {
    let items: String = shows
        .iter()
        .map(|s| {
            format!(
                r#"<li>
<img src="{img}" alt="Artist Image">
{time}
<a href="/artists/{artist_id}">{artist}</a> playing at
<a href="/venues/{venue_id}">{venue}</a>
</li>
"#,
                img = opt(s.artist_image_link.as_ref()),
                time = start_time(s.start_time.as_ref(), Format::Medium),
                artist_id = s.artist_id,
                artist = escape(&s.artist_name),
                venue_id = s.venue_id,
                venue = escape(&s.venue_name),
            )
        })
        .collect();
    page("Shows", None, &format!("<h1>Shows</h1>\n<ul>\n{}</ul>", items))
}
