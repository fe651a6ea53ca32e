//! An offline stand-in for the Spotify player, used with `--demo`.
use albumdeck_core::{DatasetEntry, ItemId, Page};
use albumdeck_spotify::{
    ClientError, ClientResult, CurrentlyPlaying, Device, PlayingItem, SimplifiedArtist,
};

use crate::remote::Transport;

pub const DEMO_ALBUM_COUNT: usize = 50;

const CATALOG: &[(&str, &str)] = &[
    ("Radiohead", "OK Computer"),
    ("Björk", "Homogenic"),
    ("Massive Attack", "Mezzanine"),
    ("Portishead", "Dummy"),
    ("Boards of Canada", "Music Has the Right to Children"),
    ("Aphex Twin", "Selected Ambient Works 85-92"),
    ("Talk Talk", "Spirit of Eden"),
    ("Kate Bush", "Hounds of Love"),
    ("David Bowie", "The Rise and Fall of Ziggy Stardust and the Spiders from Mars"),
    ("Cocteau Twins", "Heaven or Las Vegas"),
    ("My Bloody Valentine", "Loveless"),
    ("Slowdive", "Souvlaki"),
    ("Sigur Rós", "Ágætis byrjun"),
    ("坂本龍一", "音楽図鑑"),
    ("Stereolab", "Dots and Loops"),
    ("The Cure", "Disintegration"),
    ("Joy Division", "Unknown Pleasures"),
    ("Burial", "Untrue"),
    ("Godspeed You! Black Emperor", "Lift Your Skinny Fists Like Antennas to Heaven"),
    ("PJ Harvey", "Rid of Me"),
    ("Air", "Moon Safari"),
    ("Nick Drake", "Pink Moon"),
    ("Low", "Things We Lost in the Fire"),
    ("Broadcast", "Tender Buttons"),
    ("Mogwai", "Young Team"),
];

const TRACKS_PER_ALBUM: usize = 10;

pub struct DemoPlayer {
    albums: Vec<DatasetEntry>,
    devices: Vec<Device>,
    playing: Option<PlayingState>,
}

struct PlayingState {
    album: usize,
    track: usize,
    is_playing: bool,
}

impl DemoPlayer {
    pub fn new() -> Self {
        let albums = (0..DEMO_ALBUM_COUNT)
            .map(|i| {
                let (artist, title) = CATALOG[i % CATALOG.len()];
                let title = if i < CATALOG.len() {
                    title.to_string()
                } else {
                    format!("{title} (Deluxe Edition)")
                };
                DatasetEntry {
                    title: title.into(),
                    artist: artist.into(),
                    id: ItemId(format!("spotify:album:demo{i:02}")),
                }
            })
            .collect();

        let device = |id: &str, name: &str, device_type: &str, is_active: bool| Device {
            id: Some(id.to_string()),
            name: name.to_string(),
            device_type: device_type.to_string(),
            is_active,
            volume_percent: Some(70),
        };

        Self {
            albums,
            devices: vec![
                device("demo-speaker", "Living Room", "Speaker", true),
                device("demo-laptop", "Laptop", "Computer", false),
                device("demo-phone", "Phone", "Smartphone", false),
            ],
            playing: None,
        }
    }

    pub fn page(&self, offset: usize, limit: usize) -> Page {
        Page {
            items: self
                .albums
                .iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect(),
            total: self.albums.len(),
        }
    }

    pub fn play(&mut self, id: &ItemId) -> ClientResult<()> {
        let album = self
            .albums
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| not_found(format!("no album with ID {id}")))?;
        self.playing = Some(PlayingState {
            album,
            track: 0,
            is_playing: true,
        });
        Ok(())
    }

    pub fn transport(&mut self, command: Transport) -> ClientResult<()> {
        let playing = self
            .playing
            .as_mut()
            .ok_or_else(|| not_found("Player command failed: No active context".to_string()))?;
        match command {
            Transport::Resume => playing.is_playing = true,
            Transport::Pause => playing.is_playing = false,
            Transport::Next => playing.track = (playing.track + 1) % TRACKS_PER_ALBUM,
            Transport::Previous => playing.track = playing.track.saturating_sub(1),
        }
        Ok(())
    }

    pub fn currently_playing(&self) -> Option<CurrentlyPlaying> {
        let playing = self.playing.as_ref()?;
        let album = self.albums.get(playing.album)?;
        Some(CurrentlyPlaying {
            is_playing: playing.is_playing,
            progress_ms: Some(0),
            item: Some(PlayingItem {
                name: format!("{} #{}", album.title, playing.track + 1),
                uri: format!("{}:{}", album.id, playing.track + 1),
                artists: vec![SimplifiedArtist {
                    id: None,
                    name: album.artist.to_string(),
                    uri: None,
                }],
                duration_ms: 180_000,
            }),
        })
    }

    pub fn devices(&self) -> Vec<Device> {
        self.devices.clone()
    }

    pub fn transfer(&mut self, device_id: &str) -> ClientResult<()> {
        if !self.devices.iter().any(|d| d.id.as_deref() == Some(device_id)) {
            return Err(not_found(format!("Device not found: {device_id}")));
        }
        for device in &mut self.devices {
            device.is_active = device.id.as_deref() == Some(device_id);
        }
        if let Some(playing) = &mut self.playing {
            playing.is_playing = true;
        }
        Ok(())
    }
}

fn not_found(message: String) -> ClientError {
    ClientError::ApiError {
        status: 404,
        message: Some(message),
    }
}
