use crate::entities::album::{Album, AlbumCategories, DisplayMode};
use crate::entities::playing::NowPlaying;
use crate::utils::http::escape_html;
use crate::utils::time::millis_to_music_time;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

pub fn start_page(login_url: &str) -> String {
    page("baa", &format!(
        "<h1>baa</h1>\n<p>See what you're listening to.</p>\n<a href=\"{}\">Log in with Spotify</a>",
        escape_html(login_url)
    ))
}

pub fn now_playing_page(playing: &NowPlaying) -> String {
    let artists = playing.artists.iter()
        .map(|artist| format!("<a href=\"/artist/{}/albums/categories\">{}</a>", escape_html(&artist.id), escape_html(&artist.name)))
        .collect::<Vec<_>>()
        .join(", ");

    page(&format!("{} - {}", playing.artist_names(), playing.track_name), &format!(
        "<img src=\"{}\" alt=\"cover\">\n<h1>{}</h1>\n<h2>{}</h2>\n<p>{}</p>\n<p>{} {} / {}</p>\n<a href=\"/logout/\">Log out</a>",
        escape_html(&playing.img_src),
        escape_html(&playing.track_name),
        artists,
        escape_html(&playing.album_name),
        if playing.track_is_playing { "▶" } else { "⏸" },
        millis_to_music_time(playing.track_ms_progress),
        millis_to_music_time(playing.track_ms_total)
    ))
}

pub fn nothing_playing_page() -> String {
    page("baa", "<p>Nothing is playing right now.</p>\n<a href=\"/logout/\">Log out</a>")
}

pub fn artist_images_page(images: &[String]) -> String {
    let images = images.iter()
        .map(|url| format!("<img src=\"{}\" alt=\"artist\">", escape_html(url)))
        .collect::<Vec<_>>()
        .join("\n");

    page("Artist", &images)
}

fn album_list(albums: &[Album]) -> String {
    let items = albums.iter()
        .map(|album| {
            let cover = if album.image_url.is_empty() {
                String::new()
            } else {
                format!("<img src=\"{}\" alt=\"cover\"> ", escape_html(&album.image_url))
            };

            format!(
                "<li>{}<a href=\"{}\">{}</a> {}</li>",
                cover,
                escape_html(&album.spotify_url),
                escape_html(&album.release_date),
                album.album_type.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("<ul>\n{}\n</ul>", items)
}

fn other_view_link(artist_id: &str, mode: DisplayMode) -> String {
    let other = mode.other();

    format!(
        "<a href=\"/artist/{}/albums/{}\">{}</a>",
        escape_html(artist_id),
        other.as_segment(),
        other.as_segment()
    )
}

pub fn albums_categories_page(artist_id: &str, categories: &AlbumCategories) -> String {
    let sections = [
        ("Albums", &categories.albums),
        ("Singles", &categories.singles),
        ("Compilations", &categories.compilations),
        ("Other", &categories.other),
    ];

    let body = sections.iter()
        .map(|(title, albums)| format!("<h2>{} ({})</h2>\n{}", title, albums.len(), album_list(albums)))
        .collect::<Vec<_>>()
        .join("\n");

    page("Discography", &format!(
        "<p>{} releases, {}</p>\n{}",
        categories.count,
        other_view_link(artist_id, DisplayMode::Categories),
        body
    ))
}

pub fn albums_chronological_page(artist_id: &str, albums: &[Album]) -> String {
    page("Discography", &format!(
        "<p>{} releases, {}</p>\n{}",
        albums.len(),
        other_view_link(artist_id, DisplayMode::Chronological),
        album_list(albums)
    ))
}
