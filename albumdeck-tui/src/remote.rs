use std::sync::{Arc, mpsc};

use albumdeck_core::{DatasetEntry, ItemId, Page, PageSource, Player};
use albumdeck_spotify::{self as sp, ClientError, ClientResult, CurrentlyPlaying, Device};

use crate::{config, demo::DemoPlayer, tokio_thread::TokioThread};

/// Playback commands that act on whatever is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Resume,
    Pause,
    Next,
    Previous,
}
impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Resume => "resume",
            Transport::Pause => "pause",
            Transport::Next => "next",
            Transport::Previous => "previous",
        };
        write!(f, "{name}")
    }
}

/// Player status, delivered to the UI on its next tick.
#[derive(Debug, Clone)]
pub enum RemoteEvent {
    NowPlaying(Option<CurrentlyPlaying>),
    Devices(Vec<Device>),
}

enum Backend {
    Spotify(Arc<sp::Client>),
    Demo(DemoPlayer),
}

/// The player being controlled: the Spotify Web API, or the offline demo.
pub struct Remote {
    backend: Backend,
    tokio: TokioThread,
    event_tx: mpsc::Sender<RemoteEvent>,
}
impl Remote {
    pub fn spotify(
        server: &config::Server,
        tokio: TokioThread,
        event_tx: mpsc::Sender<RemoteEvent>,
    ) -> Self {
        let client = sp::Client::new(&server.api_base_url, &server.access_token);
        Self {
            backend: Backend::Spotify(Arc::new(client)),
            tokio,
            event_tx,
        }
    }

    pub fn demo(tokio: TokioThread, event_tx: mpsc::Sender<RemoteEvent>) -> Self {
        Self {
            backend: Backend::Demo(DemoPlayer::new()),
            tokio,
            event_tx,
        }
    }

    /// The largest page the backend serves in one request.
    pub fn max_page_size(&self) -> usize {
        match self.backend {
            Backend::Spotify(_) => sp::Client::MAX_SAVED_ALBUMS_LIMIT,
            Backend::Demo(_) => usize::MAX,
        }
    }

    pub fn transport(&mut self, command: Transport) {
        tracing::info!("{command}");
        match &mut self.backend {
            Backend::Spotify(client) => {
                let client = client.clone();
                let event_tx = self.event_tx.clone();
                self.tokio.spawn(async move {
                    let result = match command {
                        Transport::Resume => client.resume().await,
                        Transport::Pause => client.pause().await,
                        Transport::Next => client.next().await,
                        Transport::Previous => client.previous().await,
                    };
                    if let Err(e) = result {
                        tracing::warn!("{command} failed: {e}");
                    }
                    send_now_playing(&client, &event_tx).await;
                });
            }
            Backend::Demo(demo) => {
                if let Err(e) = demo.transport(command) {
                    tracing::warn!("{command} failed: {e}");
                }
                send(&self.event_tx, RemoteEvent::NowPlaying(demo.currently_playing()));
            }
        }
    }

    /// Moves playback to `device_id` and starts playing there.
    pub fn transfer_playback(&mut self, device_id: &str) {
        tracing::info!("transferring playback to {device_id}");
        match &mut self.backend {
            Backend::Spotify(client) => {
                let client = client.clone();
                let event_tx = self.event_tx.clone();
                let device_id = device_id.to_string();
                self.tokio.spawn(async move {
                    if let Err(e) = client.transfer_playback(&device_id, true).await {
                        tracing::warn!("failed to transfer playback to {device_id}: {e}");
                    }
                    send_devices(&client, &event_tx).await;
                    send_now_playing(&client, &event_tx).await;
                });
            }
            Backend::Demo(demo) => {
                if let Err(e) = demo.transfer(device_id) {
                    tracing::warn!("failed to transfer playback to {device_id}: {e}");
                }
                send(&self.event_tx, RemoteEvent::Devices(demo.devices()));
                send(&self.event_tx, RemoteEvent::NowPlaying(demo.currently_playing()));
            }
        }
    }

    /// Asks for the current track and the available devices.
    pub fn refresh_status(&self) {
        match &self.backend {
            Backend::Spotify(client) => {
                let client = client.clone();
                let event_tx = self.event_tx.clone();
                self.tokio.spawn(async move {
                    send_now_playing(&client, &event_tx).await;
                    send_devices(&client, &event_tx).await;
                });
            }
            Backend::Demo(demo) => {
                send(&self.event_tx, RemoteEvent::NowPlaying(demo.currently_playing()));
                send(&self.event_tx, RemoteEvent::Devices(demo.devices()));
            }
        }
    }
}

impl PageSource for Remote {
    type Error = ClientError;

    fn fetch_page(&mut self, offset: usize, limit: usize) -> ClientResult<Page> {
        match &self.backend {
            Backend::Spotify(client) => {
                let page = self
                    .tokio
                    .block_on(client.get_saved_albums(limit, offset))?;
                Ok(Page {
                    items: page
                        .items
                        .iter()
                        .map(|saved| entry_from_album(&saved.album))
                        .collect(),
                    total: page.total,
                })
            }
            Backend::Demo(demo) => Ok(demo.page(offset, limit)),
        }
    }
}

impl Player for Remote {
    type Error = ClientError;

    fn play_item(&mut self, id: &ItemId) -> ClientResult<()> {
        match &mut self.backend {
            Backend::Spotify(client) => {
                self.tokio.block_on(client.play_context(&id.0))?;
            }
            Backend::Demo(demo) => demo.play(id)?,
        }
        self.refresh_status();
        Ok(())
    }
}

fn entry_from_album(album: &sp::Album) -> DatasetEntry {
    DatasetEntry {
        title: album.name.as_str().into(),
        artist: album.primary_artist().into(),
        id: ItemId(album.uri.clone()),
    }
}

fn send(event_tx: &mpsc::Sender<RemoteEvent>, event: RemoteEvent) {
    // The receiver only goes away during shutdown.
    let _ = event_tx.send(event);
}

/// Reports "nothing playing" when the query fails.
async fn send_now_playing(client: &sp::Client, event_tx: &mpsc::Sender<RemoteEvent>) {
    let now_playing = client.currently_playing().await.unwrap_or_else(|e| {
        tracing::warn!("failed to get the currently playing track: {e}");
        None
    });
    send(event_tx, RemoteEvent::NowPlaying(now_playing));
}

async fn send_devices(client: &sp::Client, event_tx: &mpsc::Sender<RemoteEvent>) {
    match client.devices().await {
        Ok(devices) => send(event_tx, RemoteEvent::Devices(devices)),
        Err(e) => tracing::warn!("failed to list devices: {e}"),
    }
}
