//! Playback session: current song, mode flags and the streaming handle.
//!
//! All side effects on the media element go through [`MediaBackend`], so the
//! session itself stays a plain state machine that can be driven from UI
//! handlers or from tests.

use crate::lyrics::{LyricsError, LyricsRequest, LyricsState};
use crate::playlist::{Playlist, Song};
use dioxus::logger::tracing::{error, info, warn};
use serde::Deserialize;

pub const UNSUPPORTED_MESSAGE: &str = "This browser cannot play HLS streams.";
pub const MV_MODE_HINT: &str = "Switched to MV mode";
pub const MUSIC_MODE_HINT: &str = "Switched to music mode";

pub type StreamId = u64;

/// What the runtime can do with an HLS source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSupport {
    /// Media Source Extensions; the streaming library drives the element.
    Adaptive,
    /// The element plays the playlist itself.
    Native,
    Unsupported,
}

impl StreamSupport {
    pub fn detect(adaptive: bool, native: bool) -> Self {
        if adaptive {
            Self::Adaptive
        } else if native {
            Self::Native
        } else {
            Self::Unsupported
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamErrorKind {
    Network,
    Media,
    #[serde(other)]
    Other,
}

/// Events reported by the media element and the streaming library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaEvent {
    Capabilities { adaptive: bool, native: bool },
    ManifestParsed { stream: StreamId },
    StreamError { stream: StreamId, fatal: bool, kind: StreamErrorKind },
    /// `source` is the attach id the element was playing when the event fired.
    LoadedMetadata { source: StreamId },
    Play,
    Pause,
    Ended { source: StreamId },
    Time { source: StreamId, current: f64, duration: f64 },
}

/// Side effects on the media element and the streaming library.
pub trait MediaBackend {
    /// Creates a streaming handle for `url` and binds it to the media element.
    fn open_stream(&mut self, id: StreamId, url: &str);
    fn start_load(&mut self, id: StreamId);
    fn recover_media_error(&mut self, id: StreamId);
    fn destroy_stream(&mut self, id: StreamId);
    /// Points the media element straight at `url`; later element events carry `id`.
    fn set_source(&mut self, id: StreamId, url: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_native_controls(&mut self, enabled: bool);
    /// Blocking, user-visible notification.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
}

/// The glyph shown on the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportIcon {
    #[default]
    Play,
    Pause,
}

/// Which surfaces are visible for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeLayout {
    pub show_video: bool,
    pub show_cover: bool,
    pub native_controls: bool,
    pub custom_bar: bool,
}

impl ModeLayout {
    pub fn for_mode(is_mv_mode: bool) -> Self {
        Self {
            show_video: is_mv_mode,
            show_cover: !is_mv_mode,
            native_controls: is_mv_mode,
            custom_bar: !is_mv_mode,
        }
    }
}

pub struct PlaybackSession<B: MediaBackend> {
    backend: B,
    playlist: Playlist,
    current_index: usize,
    loaded: bool,
    is_mv_mode: bool,
    phase: PlaybackPhase,
    support: Option<StreamSupport>,
    source: Option<StreamId>,
    stream: Option<StreamId>,
    next_stream_id: StreamId,
    attach_pending: bool,
    awaiting_metadata: bool,
    paused: bool,
    icon: TransportIcon,
    cover: Option<String>,
    position: f64,
    duration: f64,
    lyrics: LyricsState,
}

impl<B: MediaBackend> PlaybackSession<B> {
    pub fn new(playlist: Playlist, backend: B) -> Self {
        Self {
            backend,
            playlist,
            current_index: 0,
            loaded: false,
            is_mv_mode: true,
            phase: PlaybackPhase::Idle,
            support: None,
            source: None,
            stream: None,
            next_stream_id: 1,
            attach_pending: false,
            awaiting_metadata: false,
            paused: true,
            icon: TransportIcon::Play,
            cover: None,
            position: 0.0,
            duration: 0.0,
            lyrics: LyricsState::default(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The highlighted row, once something has been loaded.
    pub fn active_index(&self) -> Option<usize> {
        self.loaded.then_some(self.current_index)
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.active_index().and_then(|index| self.playlist.get(index))
    }

    pub fn is_mv_mode(&self) -> bool {
        self.is_mv_mode
    }

    pub fn mode_layout(&self) -> ModeLayout {
        ModeLayout::for_mode(self.is_mv_mode)
    }

    #[cfg(test)]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn transport_icon(&self) -> TransportIcon {
        self.icon
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[cfg(test)]
    pub fn active_stream(&self) -> Option<StreamId> {
        self.stream
    }

    #[cfg(test)]
    pub fn active_source(&self) -> Option<StreamId> {
        self.source
    }

    pub fn lyrics(&self) -> &LyricsState {
        &self.lyrics
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Loads the song at `index` (wrapped into range) and returns the lyric
    /// request to run. `None` when the playlist is empty.
    pub fn load_song(&mut self, index: usize) -> Option<LyricsRequest> {
        let index = self.playlist.wrap(index)?;
        self.current_index = index;
        self.loaded = true;
        let song = self.playlist.get(index)?.clone();
        info!("loading song {index}: {}", song.title);

        self.cover = Some(song.cover.clone());
        self.apply_mode();
        self.teardown_stream();
        self.position = 0.0;
        self.duration = 0.0;
        self.phase = PlaybackPhase::Loading;
        self.attach_pending = true;
        self.attach(&song);

        Some(self.lyrics.begin(index, song.lyrics.clone()))
    }

    pub fn next(&mut self) -> Option<LyricsRequest> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        self.load_song((self.current_index + 1) % len)
    }

    pub fn previous(&mut self) -> Option<LyricsRequest> {
        let len = self.playlist.len();
        if len == 0 {
            return None;
        }
        self.load_song((self.current_index + len - 1) % len)
    }

    pub fn toggle_play_pause(&mut self) {
        if self.paused {
            self.start_playback();
        } else {
            self.pause_playback();
        }
    }

    /// Flips between MV and music mode and returns the hint to show.
    pub fn toggle_mode(&mut self) -> &'static str {
        self.is_mv_mode = !self.is_mv_mode;
        self.apply_mode();
        if self.is_mv_mode {
            MV_MODE_HINT
        } else {
            MUSIC_MODE_HINT
        }
    }

    /// Single click on the stage.
    pub fn primary_click(&mut self) {
        if !self.is_mv_mode {
            self.toggle_play_pause();
        } else if self.paused {
            self.start_playback();
            self.backend.set_native_controls(true);
        } else {
            self.pause_playback();
        }
    }

    /// Enter toggles fullscreen, and only while the video is on screen.
    pub fn wants_fullscreen(&self, key: &str) -> bool {
        key == "Enter" && self.is_mv_mode
    }

    pub fn resolve_lyrics(&mut self, request: &LyricsRequest, outcome: Result<String, LyricsError>) -> bool {
        self.lyrics.resolve(request, outcome)
    }

    /// Feeds one media event into the state machine. An `Ended` event returns the
    /// lyric request of the song that follows.
    pub fn handle_event(&mut self, event: MediaEvent) -> Option<LyricsRequest> {
        match event {
            MediaEvent::Capabilities { adaptive, native } => {
                let support = StreamSupport::detect(adaptive, native);
                let previous = self.support.replace(support);
                if previous == Some(support) {
                    return None;
                }
                info!("stream support: {support:?}");
                let stalled = self.loaded && previous == Some(StreamSupport::Unsupported);
                if self.attach_pending || stalled {
                    self.reattach_current();
                }
            }
            MediaEvent::ManifestParsed { stream } => {
                if self.stream == Some(stream) {
                    self.start_playback();
                }
            }
            MediaEvent::StreamError { stream, fatal, kind } => {
                if fatal && self.stream == Some(stream) {
                    self.recover(stream, kind);
                }
            }
            MediaEvent::LoadedMetadata { source } => {
                if self.awaiting_metadata && self.source == Some(source) {
                    self.awaiting_metadata = false;
                    self.start_playback();
                }
            }
            MediaEvent::Play => {
                self.paused = false;
                self.icon = TransportIcon::Pause;
                if self.phase != PlaybackPhase::Idle {
                    self.phase = PlaybackPhase::Playing;
                }
            }
            MediaEvent::Pause => {
                self.paused = true;
                self.icon = TransportIcon::Play;
                if self.phase == PlaybackPhase::Playing {
                    self.phase = PlaybackPhase::Paused;
                }
            }
            MediaEvent::Time { source, current, duration } => {
                if self.source != Some(source) {
                    return None;
                }
                self.position = if current.is_finite() { current.max(0.0) } else { 0.0 };
                self.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
            }
            MediaEvent::Ended { source } => {
                if self.source == Some(source) {
                    return self.next();
                }
            }
        }
        None
    }

    fn attach(&mut self, song: &Song) {
        let Some(support) = self.support else {
            return;
        };
        self.attach_pending = false;

        match support {
            StreamSupport::Adaptive => {
                let id = self.next_source();
                self.backend.open_stream(id, &song.file);
                self.stream = Some(id);
            }
            StreamSupport::Native => {
                let id = self.next_source();
                self.awaiting_metadata = true;
                self.backend.set_source(id, &song.file);
            }
            StreamSupport::Unsupported => {
                error!("no HLS playback path for {}", song.file);
                self.phase = PlaybackPhase::Idle;
                self.backend.alert(UNSUPPORTED_MESSAGE);
            }
        }
    }

    fn next_source(&mut self) -> StreamId {
        let id = self.next_stream_id;
        self.next_stream_id += 1;
        self.source = Some(id);
        id
    }

    /// Attaches the current song again once the runtime can play it.
    fn reattach_current(&mut self) {
        let Some(song) = self.playlist.get(self.current_index).cloned() else {
            return;
        };
        self.teardown_stream();
        self.phase = PlaybackPhase::Loading;
        self.attach(&song);
    }

    fn teardown_stream(&mut self) {
        if let Some(id) = self.stream.take() {
            self.backend.destroy_stream(id);
        }
        self.source = None;
        self.awaiting_metadata = false;
    }

    fn recover(&mut self, stream: StreamId, kind: StreamErrorKind) {
        match kind {
            StreamErrorKind::Network => {
                warn!("stream {stream}: fatal network error, reloading");
                self.backend.start_load(stream);
            }
            StreamErrorKind::Media => {
                warn!("stream {stream}: fatal media error, recovering");
                self.backend.recover_media_error(stream);
            }
            StreamErrorKind::Other => {
                warn!("stream {stream}: unrecoverable error, tearing down");
                self.teardown_stream();
                self.phase = PlaybackPhase::Idle;
                self.paused = true;
                self.icon = TransportIcon::Play;
            }
        }
    }

    fn start_playback(&mut self) {
        self.backend.play();
        self.paused = false;
        self.icon = TransportIcon::Pause;
        if self.phase != PlaybackPhase::Idle {
            self.phase = PlaybackPhase::Playing;
        }
    }

    fn pause_playback(&mut self) {
        self.backend.pause();
        self.paused = true;
        self.icon = TransportIcon::Play;
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Paused;
        }
    }

    fn apply_mode(&mut self) {
        let layout = self.mode_layout();
        self.backend.set_native_controls(layout.native_controls);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::MediaTemplate;
    use crate::lyrics::LyricsView;
    use super::fake::FakeMedia;

    fn playlist(titles: &[&str]) -> Playlist {
        let catalog = Catalog::new().with("All", titles.iter().copied());
        Playlist::build(&catalog, &MediaTemplate::default())
    }

    fn session_with(titles: &[&str], adaptive: bool, native: bool) -> PlaybackSession<FakeMedia> {
        let mut session = PlaybackSession::new(playlist(titles), FakeMedia::default());
        session.handle_event(MediaEvent::Capabilities { adaptive, native });
        session
    }

    fn adaptive_session(titles: &[&str]) -> PlaybackSession<FakeMedia> {
        session_with(titles, true, false)
    }

    #[test]
    fn load_song_wraps_and_highlights_one_entry() {
        let mut session = adaptive_session(&["A", "B", "C"]);
        for requested in 0..10 {
            session.load_song(requested);
            let active: Vec<_> = session
                .playlist()
                .entries()
                .filter(|entry| Some(entry.index) == session.active_index())
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, requested % 3);
        }
    }

    #[test]
    fn nothing_is_active_before_the_first_load() {
        let session = adaptive_session(&["A"]);
        assert_eq!(session.active_index(), None);
        assert_eq!(session.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn empty_playlist_is_a_silent_no_op() {
        let mut session = adaptive_session(&[]);
        assert!(session.load_song(0).is_none());
        assert!(session.next().is_none());
        assert!(session.previous().is_none());
        assert!(session.backend().opened.is_empty());
        assert_eq!(session.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut session = adaptive_session(&["A", "B", "C"]);
        session.load_song(1);
        session.next();
        assert_eq!(session.current_index(), 2);
        session.next();
        assert_eq!(session.current_index(), 0);
        session.previous();
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn exactly_one_stream_after_any_sequence_of_loads() {
        let mut session = adaptive_session(&["A", "B", "C"]);
        for index in [0, 0, 2, 5, 1, 1, 7] {
            session.load_song(index);
            assert_eq!(session.backend().live_streams.len(), 1);
            assert_eq!(
                session.backend().live_streams.iter().next().copied(),
                session.active_stream()
            );
        }
        session.next();
        session.previous();
        assert_eq!(session.backend().live_streams.len(), 1);
    }

    #[test]
    fn manifest_parsed_starts_playback() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        assert_eq!(session.phase(), PlaybackPhase::Loading);
        let stream = session.active_stream().unwrap();
        session.handle_event(MediaEvent::ManifestParsed { stream });
        assert_eq!(session.phase(), PlaybackPhase::Playing);
        assert_eq!(session.transport_icon(), TransportIcon::Pause);
        assert_eq!(session.backend().plays, 1);
    }

    #[test]
    fn events_from_replaced_streams_are_ignored() {
        let mut session = adaptive_session(&["A", "B"]);
        session.load_song(0);
        let old = session.active_stream().unwrap();
        session.load_song(1);

        session.handle_event(MediaEvent::ManifestParsed { stream: old });
        session.handle_event(MediaEvent::StreamError {
            stream: old,
            fatal: true,
            kind: StreamErrorKind::Network,
        });
        assert_eq!(session.backend().plays, 0);
        assert!(session.backend().start_loads.is_empty());
        assert_eq!(session.phase(), PlaybackPhase::Loading);
    }

    #[test]
    fn fatal_errors_follow_the_recovery_policy() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        let stream = session.active_stream().unwrap();

        session.handle_event(MediaEvent::StreamError {
            stream,
            fatal: true,
            kind: StreamErrorKind::Network,
        });
        assert_eq!(session.backend().start_loads, [stream]);

        session.handle_event(MediaEvent::StreamError {
            stream,
            fatal: true,
            kind: StreamErrorKind::Media,
        });
        assert_eq!(session.backend().recoveries, [stream]);

        session.handle_event(MediaEvent::StreamError {
            stream,
            fatal: false,
            kind: StreamErrorKind::Other,
        });
        assert_eq!(session.active_stream(), Some(stream));

        session.handle_event(MediaEvent::StreamError {
            stream,
            fatal: true,
            kind: StreamErrorKind::Other,
        });
        assert_eq!(session.active_stream(), None);
        assert!(session.backend().live_streams.is_empty());
        assert_eq!(session.phase(), PlaybackPhase::Idle);

        session.load_song(0);
        assert_eq!(session.backend().live_streams.len(), 1);
        assert_eq!(session.phase(), PlaybackPhase::Loading);
    }

    #[test]
    fn native_playback_waits_for_metadata() {
        let mut session = session_with(&["A"], false, true);
        session.load_song(0);
        let source = session.active_source().unwrap();
        assert_eq!(
            session.backend().sources,
            [(source, "https://r5.dlozs.top/mp4/A.m3u8".to_string())]
        );
        assert!(session.backend().opened.is_empty());
        assert_eq!(session.backend().plays, 0);

        session.handle_event(MediaEvent::LoadedMetadata { source: source + 1 });
        assert_eq!(session.backend().plays, 0);
        session.handle_event(MediaEvent::LoadedMetadata { source });
        assert_eq!(session.backend().plays, 1);
        session.handle_event(MediaEvent::LoadedMetadata { source });
        assert_eq!(session.backend().plays, 1);
    }

    #[test]
    fn unsupported_runtime_alerts_and_stays_responsive() {
        let mut session = session_with(&["A", "B"], false, false);
        session.load_song(0);
        assert_eq!(session.backend().alerts, [UNSUPPORTED_MESSAGE]);
        assert_eq!(session.phase(), PlaybackPhase::Idle);

        session.next();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.backend().alerts.len(), 2);
    }

    #[test]
    fn attach_is_deferred_until_capabilities_arrive() {
        let mut session = PlaybackSession::new(playlist(&["A"]), FakeMedia::default());
        session.load_song(0);
        assert!(session.backend().opened.is_empty());

        session.handle_event(MediaEvent::Capabilities {
            adaptive: true,
            native: false,
        });
        assert_eq!(session.backend().opened.len(), 1);
    }

    #[test]
    fn toggle_play_pause_reports_the_resulting_state() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        session.toggle_play_pause();
        assert_eq!(session.transport_icon(), TransportIcon::Pause);
        assert!(!session.is_paused());
        session.toggle_play_pause();
        assert_eq!(session.transport_icon(), TransportIcon::Play);
        assert_eq!(session.backend().pauses, 1);
    }

    #[test]
    fn toggling_mode_twice_restores_layout() {
        let mut session = adaptive_session(&["A"]);
        let before = session.mode_layout();
        assert_eq!(session.toggle_mode(), MUSIC_MODE_HINT);
        let music = session.mode_layout();
        assert!(music.show_cover && music.custom_bar);
        assert!(!music.show_video && !music.native_controls);
        assert_eq!(session.backend().native_controls, Some(false));
        assert_eq!(session.toggle_mode(), MV_MODE_HINT);
        assert_eq!(session.mode_layout(), before);
        assert_eq!(session.backend().native_controls, Some(true));
    }

    #[test]
    fn primary_click_in_mv_mode_restores_native_controls() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        session.backend_mut().native_controls = Some(false);
        session.primary_click();
        assert_eq!(session.backend().plays, 1);
        assert_eq!(session.backend().native_controls, Some(true));
        session.primary_click();
        assert_eq!(session.backend().pauses, 1);
    }

    #[test]
    fn fullscreen_only_in_mv_mode() {
        let mut session = adaptive_session(&["A"]);
        assert!(session.wants_fullscreen("Enter"));
        assert!(!session.wants_fullscreen(" "));
        session.toggle_mode();
        assert!(!session.wants_fullscreen("Enter"));
    }

    #[test]
    fn ended_advances_to_the_next_song() {
        let mut session = adaptive_session(&["A", "B"]);
        session.load_song(1);
        let source = session.active_source().unwrap();
        let request = session.handle_event(MediaEvent::Ended { source }).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(request.song_index, 0);
    }

    #[test]
    fn events_queued_by_the_previous_song_are_ignored() {
        let mut session = adaptive_session(&["A", "B", "C"]);
        session.load_song(0);
        let old = session.active_source().unwrap();
        session.next();
        assert_eq!(session.current_index(), 1);

        session.handle_event(MediaEvent::Time {
            source: old,
            current: 200.0,
            duration: 210.0,
        });
        assert!(session.handle_event(MediaEvent::Ended { source: old }).is_none());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.position(), 0.0);
        assert_eq!(session.duration(), 0.0);
    }

    #[test]
    fn rejected_autoplay_leaves_the_next_toggle_playing() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        let stream = session.active_stream().unwrap();
        session.handle_event(MediaEvent::ManifestParsed { stream });
        assert_eq!(session.backend().plays, 1);

        // The page reports a refused play() as a pause.
        session.handle_event(MediaEvent::Pause);
        assert_eq!(session.transport_icon(), TransportIcon::Play);

        session.toggle_play_pause();
        assert_eq!(session.backend().plays, 2);
        assert_eq!(session.backend().pauses, 0);
        assert_eq!(session.transport_icon(), TransportIcon::Pause);
    }

    #[test]
    fn late_streaming_support_attaches_the_current_song() {
        let mut session = session_with(&["A", "B"], false, false);
        session.load_song(1);
        assert_eq!(session.backend().alerts, [UNSUPPORTED_MESSAGE]);
        assert_eq!(session.phase(), PlaybackPhase::Idle);

        session.handle_event(MediaEvent::Capabilities {
            adaptive: true,
            native: false,
        });
        assert_eq!(session.phase(), PlaybackPhase::Loading);
        assert_eq!(session.backend().opened.len(), 1);
        assert_eq!(session.backend().opened[0].1, "https://r5.dlozs.top/mp4/B.m3u8");

        session.handle_event(MediaEvent::Capabilities {
            adaptive: true,
            native: false,
        });
        assert_eq!(session.backend().opened.len(), 1);
        assert_eq!(session.backend().live_streams.len(), 1);
        assert_eq!(session.backend().alerts.len(), 1);
    }

    #[test]
    fn media_events_keep_the_icon_in_sync() {
        let mut session = adaptive_session(&["A"]);
        session.load_song(0);
        session.handle_event(MediaEvent::Play);
        assert_eq!(session.phase(), PlaybackPhase::Playing);
        session.handle_event(MediaEvent::Pause);
        assert_eq!(session.phase(), PlaybackPhase::Paused);
        assert_eq!(session.transport_icon(), TransportIcon::Play);
    }

    #[test]
    fn stale_lyrics_do_not_overwrite_the_current_song() {
        let mut session = adaptive_session(&["A", "B"]);
        let first = session.load_song(0).unwrap();
        let second = session.load_song(1).unwrap();
        assert!(!session.resolve_lyrics(&first, Ok("A words".into())));
        assert!(session.resolve_lyrics(&second, Err(LyricsError::Status(404))));
        assert_eq!(session.lyrics().view(), &LyricsView::Unavailable);
    }

    #[test]
    fn load_sets_cover_and_lyrics_path() {
        let mut session = adaptive_session(&["A"]);
        let request = session.load_song(0).unwrap();
        assert_eq!(session.cover(), Some("https://r5.dlozs.top/jpg/A.jpg"));
        assert_eq!(request.path.as_deref(), Some("kasi/A.txt"));
    }

    #[test]
    fn media_events_deserialize_from_bridge_json() {
        let event: MediaEvent =
            serde_json::from_str(r#"{"type":"stream_error","stream":3,"fatal":true,"kind":"mux"}"#)
                .unwrap();
        assert_eq!(
            event,
            MediaEvent::StreamError {
                stream: 3,
                fatal: true,
                kind: StreamErrorKind::Other
            }
        );

        let ended: MediaEvent = serde_json::from_str(r#"{"type":"ended","source":7}"#).unwrap();
        assert_eq!(ended, MediaEvent::Ended { source: 7 });
    }
}
