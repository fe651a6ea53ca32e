use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult};

/// Represents an artist as embedded in albums and tracks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimplifiedArtist {
    /// The artist ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The artist name
    pub name: String,
    /// The artist URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Represents an album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// The album ID
    pub id: String,
    /// The album name
    pub name: String,
    /// The album URI, usable as a playback context
    pub uri: String,
    /// The album artists
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    /// The release date, at whatever precision the API has it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// The number of tracks on the album
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tracks: Option<u32>,
}
impl Album {
    /// The name of the first credited artist.
    pub fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or("Unknown Artist")
    }
}

/// An album in the user's library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbum {
    /// When the album was saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    /// The album itself
    pub album: Album,
}

/// One page of the user's saved albums
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumPage {
    /// The albums on this page
    pub items: Vec<SavedAlbum>,
    /// The total number of saved albums
    pub total: usize,
    /// The page size that was used
    pub limit: usize,
    /// The offset of this page
    pub offset: usize,
}

/// Album-related endpoints.
impl Client {
    /// The largest page the saved albums endpoint will return.
    pub const MAX_SAVED_ALBUMS_LIMIT: usize = 50;

    /// Get a page of the current user's saved albums.
    ///
    /// `limit` is capped at [`Self::MAX_SAVED_ALBUMS_LIMIT`].
    pub async fn get_saved_albums(&self, limit: usize, offset: usize) -> ClientResult<SavedAlbumPage> {
        self.request(
            "me/albums",
            &[
                ("limit", limit.clamp(1, Self::MAX_SAVED_ALBUMS_LIMIT).to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved_albums_page() {
        let body = br#"{
            "href": "https://api.spotify.com/v1/me/albums?offset=0&limit=2",
            "limit": 2,
            "next": "https://api.spotify.com/v1/me/albums?offset=2&limit=2",
            "offset": 0,
            "previous": null,
            "total": 3,
            "items": [
                {
                    "added_at": "2019-03-01T10:00:00Z",
                    "album": {
                        "album_type": "album",
                        "id": "6dVIqQ8qmQ5GBnJ9shOYGE",
                        "name": "OK Computer",
                        "uri": "spotify:album:6dVIqQ8qmQ5GBnJ9shOYGE",
                        "release_date": "1997-05-21",
                        "total_tracks": 12,
                        "artists": [{"id": "4Z8W4fKeB5YxbusRsdQVPb", "name": "Radiohead", "uri": "spotify:artist:4Z8W4fKeB5YxbusRsdQVPb"}]
                    }
                },
                {
                    "album": {
                        "id": "x",
                        "name": "Untitled",
                        "uri": "spotify:album:x",
                        "artists": []
                    }
                }
            ]
        }"#;
        let page: SavedAlbumPage = Client::parse_response(200, body).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].album.name, "OK Computer");
        assert_eq!(page.items[0].album.primary_artist(), "Radiohead");
        assert_eq!(page.items[1].album.primary_artist(), "Unknown Artist");
        assert_eq!(page.items[1].added_at, None);
    }
}
