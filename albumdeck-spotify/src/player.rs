use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{Client, ClientResult, SimplifiedArtist};

/// A device that can play back audio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    /// The device ID; absent for restricted devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The device name
    pub name: String,
    /// The device type, e.g. `Computer` or `Smartphone`
    #[serde(rename = "type")]
    pub device_type: String,
    /// Whether this is the currently active device
    #[serde(default)]
    pub is_active: bool,
    /// The current volume, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_percent: Option<u32>,
}

/// Represents a playing item, usually a track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayingItem {
    /// The item name
    pub name: String,
    /// The item URI
    pub uri: String,
    /// The credited artists; empty for episodes
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    /// The item duration in milliseconds
    #[serde(default)]
    pub duration_ms: u64,
}
impl PlayingItem {
    /// `Name (Artist, Artist)`.
    pub fn display_name(&self) -> String {
        let artists = self
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} ({artists})", self.name)
    }
}

/// What the user is currently listening to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentlyPlaying {
    /// Whether playback is running
    #[serde(default)]
    pub is_playing: bool,
    /// The position within the item, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_ms: Option<u64>,
    /// The item; absent during ads or for unsupported content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<PlayingItem>,
}

/// Player endpoints.
impl Client {
    /// Start playing a context (album, playlist, ...) by URI.
    pub async fn play_context(&self, context_uri: &str) -> ClientResult<()> {
        self.command(
            Method::PUT,
            "me/player/play",
            Some(serde_json::json!({ "context_uri": context_uri })),
        )
        .await
    }

    /// Resume playback on the active device.
    pub async fn resume(&self) -> ClientResult<()> {
        self.command(Method::PUT, "me/player/play", None).await
    }

    /// Pause playback on the active device.
    pub async fn pause(&self) -> ClientResult<()> {
        self.command(Method::PUT, "me/player/pause", None).await
    }

    /// Skip to the next item.
    pub async fn next(&self) -> ClientResult<()> {
        self.command(Method::POST, "me/player/next", None).await
    }

    /// Skip to the previous item.
    pub async fn previous(&self) -> ClientResult<()> {
        self.command(Method::POST, "me/player/previous", None).await
    }

    /// Get what is currently playing, if anything.
    pub async fn currently_playing(&self) -> ClientResult<Option<CurrentlyPlaying>> {
        self.request_optional("me/player/currently-playing", &[])
            .await
    }

    /// Get the devices available for playback.
    pub async fn devices(&self) -> ClientResult<Vec<Device>> {
        #[derive(Deserialize)]
        struct DevicesResponse {
            devices: Vec<Device>,
        }

        Ok(self
            .request::<DevicesResponse>("me/player/devices", &[])
            .await?
            .devices)
    }

    /// Move playback to another device.
    pub async fn transfer_playback(&self, device_id: &str, play: bool) -> ClientResult<()> {
        self.command(
            Method::PUT,
            "me/player",
            Some(serde_json::json!({ "device_ids": [device_id], "play": play })),
        )
        .await
    }
}
