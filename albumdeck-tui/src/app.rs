use std::{
    path::PathBuf,
    sync::mpsc,
    time::{Duration, Instant},
};

use albumdeck_core::AlbumList;
use albumdeck_spotify::CurrentlyPlaying;

use crate::{
    config::Config,
    log_buffer::LogBuffer,
    remote::{Remote, RemoteEvent, Transport},
    ui::{devices::DevicesState, logs::LogsState},
};

/// Which panel/mode the UI is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Library,
    Devices,
    Logs,
}

pub struct App {
    // Core infrastructure (shared across views)
    pub config: Config,
    config_path: PathBuf,
    pub remote: Remote,
    remote_rx: mpsc::Receiver<RemoteEvent>,
    last_status_refresh: Instant,

    // Global UI orchestration
    pub focused_panel: FocusedPanel,
    /// The panel to return to when the logs are closed.
    return_panel: FocusedPanel,
    pub should_quit: bool,
    pub needs_redraw: bool,

    // Per-view state
    pub albums: AlbumList,
    pub now_playing: Option<CurrentlyPlaying>,
    pub devices: DevicesState,
    pub logs: LogsState,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        albums: AlbumList,
        remote: Remote,
        remote_rx: mpsc::Receiver<RemoteEvent>,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            config,
            config_path,
            remote,
            remote_rx,
            last_status_refresh: Instant::now(),

            focused_panel: FocusedPanel::Library,
            return_panel: FocusedPanel::Library,
            should_quit: false,
            needs_redraw: true,

            albums,
            now_playing: None,
            devices: DevicesState::default(),
            logs: LogsState::new(log_buffer),
        }
    }

    pub fn tick(&mut self) {
        while let Ok(event) = self.remote_rx.try_recv() {
            self.apply_remote_event(event);
        }

        let refresh_interval = Duration::from_secs(self.config.general.status_refresh_secs.max(1));
        if self.last_status_refresh.elapsed() >= refresh_interval {
            self.remote.refresh_status();
            self.last_status_refresh = Instant::now();
        }

        // New log entries can arrive at any time.
        self.needs_redraw = true;
    }

    fn apply_remote_event(&mut self, event: RemoteEvent) {
        match event {
            RemoteEvent::NowPlaying(now_playing) => self.now_playing = now_playing,
            RemoteEvent::Devices(devices) => self.devices.update(devices),
        }
    }

    pub fn transport(&mut self, command: Transport) {
        self.remote.transport(command);
        self.last_status_refresh = Instant::now();
    }

    pub fn toggle_logs(&mut self) {
        if self.focused_panel == FocusedPanel::Logs {
            self.focused_panel = self.return_panel;
        } else {
            self.return_panel = self.focused_panel;
            self.focused_panel = FocusedPanel::Logs;
            self.logs.scroll_to_end();
        }
    }

    pub fn switch_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Library => FocusedPanel::Devices,
            FocusedPanel::Devices | FocusedPanel::Logs => FocusedPanel::Library,
        };
    }

    pub fn save_state(&self) {
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::error!("{e:#}");
        }
    }
}
