use log::{debug, warn};
use crate::entities::album::Album;
use crate::http::spotify::SpotifyApi;
use crate::http::ProviderError;

pub const PAGE_SIZE: u32 = 50;

/// Collects every album of `artist_id`, one page after another, and returns
/// them sorted by release date.
pub async fn fetch_discography(api: &dyn SpotifyApi, artist_id: &str, token: &str) -> Result<Vec<Album>, ProviderError> {
    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let page = api.artist_albums(token, artist_id, offset, PAGE_SIZE).await?;

        let page_items = page.items.ok_or(ProviderError::AuthExpired)?;
        let fetched = page_items.len();

        debug!("artist {}: {} albums at offset {}", artist_id, fetched, offset);

        items.extend(page_items);

        if page.next.is_none() {
            break;
        }

        if fetched == 0 {
            warn!("artist {}: empty page at offset {} still points to a next page, stopping", artist_id, offset);
            break;
        }

        offset += PAGE_SIZE;
    }

    let mut albums: Vec<Album> = items.into_iter().map(Album::from).collect();

    if albums.iter().any(|album| album.image_url.is_empty()) {
        debug!("artist {}: some albums came without a cover", artist_id);
    }

    sort_by_release_date(&mut albums);

    Ok(albums)
}

/// Plain string comparison, which is right as long as the dates share a precision.
pub fn sort_by_release_date(albums: &mut [Album]) {
    albums.sort_by(|a, b| a.release_date.cmp(&b.release_date));
}
