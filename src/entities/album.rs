use serde::Serialize;
use crate::entities::spotify::SpotifyAlbumItem;

/// Stands in for a release date or link the provider didn't send.
pub const UNKNOWN: &str = "unknown";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    Other
}

impl AlbumType {
    pub fn from_provider(value: &str) -> Self {
        match value {
            "album" => AlbumType::Album,
            "single" => AlbumType::Single,
            "compilation" => AlbumType::Compilation,
            _ => AlbumType::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
            AlbumType::Other => "other"
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Album {
    pub image_url: String,
    pub release_date: String,
    pub spotify_url: String,
    #[serde(rename = "type")]
    pub album_type: AlbumType
}

impl From<SpotifyAlbumItem> for Album {
    fn from(item: SpotifyAlbumItem) -> Self {
        let image_url = item.images.into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_default();

        let spotify_url = item.external_urls.get("spotify")
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            image_url,
            release_date: item.release_date.unwrap_or_else(|| UNKNOWN.to_string()),
            spotify_url,
            album_type: AlbumType::from_provider(item.album_type.as_deref().unwrap_or(""))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Categories,
    Chronological
}

impl DisplayMode {
    /// `categories` and an empty segment pick the grouped view, anything else
    /// the chronological one.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "" | "categories" => DisplayMode::Categories,
            _ => DisplayMode::Chronological
        }
    }

    pub fn as_segment(&self) -> &'static str {
        match self {
            DisplayMode::Categories => "categories",
            DisplayMode::Chronological => "chronological"
        }
    }

    pub fn other(&self) -> Self {
        match self {
            DisplayMode::Categories => DisplayMode::Chronological,
            DisplayMode::Chronological => DisplayMode::Categories
        }
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AlbumCategories {
    pub albums: Vec<Album>,
    pub singles: Vec<Album>,
    pub compilations: Vec<Album>,
    pub other: Vec<Album>,
    pub count: usize
}

impl AlbumCategories {
    pub fn from_albums(albums: &[Album]) -> Self {
        let mut categories = AlbumCategories {
            count: albums.len(),
            ..Default::default()
        };

        for album in albums {
            let group = match album.album_type {
                AlbumType::Album => &mut categories.albums,
                AlbumType::Single => &mut categories.singles,
                AlbumType::Compilation => &mut categories.compilations,
                AlbumType::Other => &mut categories.other
            };
            group.push(album.clone());
        }

        categories
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;
    use crate::entities::spotify::SpotifyImage;

    fn album(date: &str, album_type: AlbumType) -> Album {
        Album {
            image_url: format!("https://i.scdn.co/{}", date),
            release_date: date.to_string(),
            spotify_url: "https://open.spotify.com/album/x".to_string(),
            album_type
        }
    }

    #[test]
    fn test_unknown_type_is_other() {
        assert_eq!(AlbumType::from_provider("ep"), AlbumType::Other);
        assert_eq!(AlbumType::from_provider("Album"), AlbumType::Other);
        assert_eq!(AlbumType::from_provider("compilation"), AlbumType::Compilation);
    }

    #[test]
    fn test_item_normalization() {
        let mut external_urls = HashMap::new();
        external_urls.insert("spotify".to_string(), "https://open.spotify.com/album/1".to_string());

        let item = SpotifyAlbumItem {
            album_type: Some("single".to_string()),
            release_date: Some("2019-04".to_string()),
            external_urls,
            images: vec![
                SpotifyImage { url: "https://i.scdn.co/big".to_string() },
                SpotifyImage { url: "https://i.scdn.co/small".to_string() },
            ]
        };

        let album = Album::from(item);
        assert_eq!(album.image_url, "https://i.scdn.co/big");
        assert_eq!(album.release_date, "2019-04");
        assert_eq!(album.spotify_url, "https://open.spotify.com/album/1");
        assert_eq!(album.album_type, AlbumType::Single);
    }

    #[test]
    fn test_missing_fields_use_sentinels() {
        let album = Album::from(SpotifyAlbumItem::default());

        assert_eq!(album.image_url, "");
        assert_eq!(album.release_date, UNKNOWN);
        assert_eq!(album.spotify_url, UNKNOWN);
        assert_eq!(album.album_type, AlbumType::Other);
    }

    #[test]
    fn test_display_mode_segments() {
        assert_eq!(DisplayMode::from_segment("categories"), DisplayMode::Categories);
        assert_eq!(DisplayMode::from_segment(""), DisplayMode::Categories);
        assert_eq!(DisplayMode::from_segment("chronological"), DisplayMode::Chronological);
        assert_eq!(DisplayMode::from_segment("whatever"), DisplayMode::Chronological);
        assert_eq!(DisplayMode::Categories.other().as_segment(), "chronological");
    }

    #[test]
    fn test_categories_keep_relative_order() {
        let albums = vec![
            album("2001", AlbumType::Album),
            album("2002", AlbumType::Single),
            album("2003", AlbumType::Other),
            album("2004", AlbumType::Album),
            album("2005", AlbumType::Compilation),
            album("2006", AlbumType::Single),
        ];

        let categories = AlbumCategories::from_albums(&albums);

        assert_eq!(categories.count, 6);
        let dates = |group: &[Album]| group.iter().map(|a| a.release_date.clone()).collect::<Vec<_>>();
        assert_eq!(dates(&categories.albums), vec!["2001", "2004"]);
        assert_eq!(dates(&categories.singles), vec!["2002", "2006"]);
        assert_eq!(dates(&categories.compilations), vec!["2005"]);
        assert_eq!(dates(&categories.other), vec!["2003"]);
    }
}
