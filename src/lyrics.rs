//! Plain-text lyric loading and the render model for the lyrics panel.

use dioxus::logger::tracing::debug;
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
static LYRICS_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const LOADING_TEXT: &str = "Loading lyrics...";
pub const UNAVAILABLE_TEXT: &str = "No lyrics available";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LyricsError {
    #[error("song has no lyric file")]
    Missing,
    #[error("lyric request failed with status {0}")]
    Status(u16),
    #[error("lyric request failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricLine {
    Text(String),
    /// A blank line in the source; rendered with a fixed height.
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LyricsView {
    #[default]
    Idle,
    Loading,
    Lines(Vec<LyricLine>),
    Unavailable,
}

impl LyricsView {
    /// Maps a finished fetch onto what the panel shows.
    ///
    /// An empty body and a failed request look the same to the listener.
    pub fn from_outcome(outcome: Result<String, LyricsError>) -> Self {
        match outcome {
            Ok(body) if !body.trim().is_empty() => Self::Lines(split_lines(&body)),
            Ok(_) => Self::Unavailable,
            Err(err) => {
                debug!("lyrics unavailable: {err}");
                Self::Unavailable
            }
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Unavailable => Some(UNAVAILABLE_TEXT),
            Self::Idle | Self::Lines(_) => None,
        }
    }
}

fn split_lines(body: &str) -> Vec<LyricLine> {
    body.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .map(|line| {
            if line.trim().is_empty() {
                LyricLine::Spacer
            } else {
                LyricLine::Text(line.to_string())
            }
        })
        .collect()
}

/// An in-flight lyric fetch, tagged with the selection that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    pub song_index: usize,
    pub ticket: u64,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LyricsState {
    ticket: u64,
    song_index: Option<usize>,
    view: LyricsView,
}

impl LyricsState {
    /// Starts a new load and invalidates every earlier request.
    pub fn begin(&mut self, song_index: usize, path: Option<String>) -> LyricsRequest {
        self.ticket = self.ticket.wrapping_add(1);
        self.song_index = Some(song_index);
        self.view = LyricsView::Loading;
        LyricsRequest {
            song_index,
            ticket: self.ticket,
            path,
        }
    }

    /// Applies a finished fetch. Returns `false` when the request was stale.
    pub fn resolve(&mut self, request: &LyricsRequest, outcome: Result<String, LyricsError>) -> bool {
        if request.ticket != self.ticket || Some(request.song_index) != self.song_index {
            debug!(
                "dropping stale lyrics for song {} (ticket {})",
                request.song_index, request.ticket
            );
            return false;
        }
        self.view = LyricsView::from_outcome(outcome);
        true
    }

    pub fn view(&self) -> &LyricsView {
        &self.view
    }
}

/// Fetches the lyric text for `request`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_lyrics(request: &LyricsRequest, _origin: Option<&str>) -> Result<String, LyricsError> {
    let path = request.path.as_deref().ok_or(LyricsError::Missing)?;
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| LyricsError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(LyricsError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|err| LyricsError::Network(err.to_string()))
}

/// Fetches the lyric text for `request`.
///
/// Relative paths need `origin`; without one the lyrics count as missing.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_lyrics(request: &LyricsRequest, origin: Option<&str>) -> Result<String, LyricsError> {
    let path = request.path.as_deref().ok_or(LyricsError::Missing)?;
    let url = resolve_lyrics_url(path, origin).ok_or(LyricsError::Missing)?;
    let response = LYRICS_HTTP_CLIENT
        .get(&url)
        .send()
        .await
        .map_err(|err| LyricsError::Network(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(LyricsError::Status(status.as_u16()));
    }
    response
        .text()
        .await
        .map_err(|err| LyricsError::Network(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_lyrics_url(path: &str, origin: Option<&str>) -> Option<String> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let origin = origin?.trim_end_matches('/');
    if origin.is_empty() {
        return None;
    }
    Some(format!("{origin}/{}", path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_and_not_found_render_the_same() {
        let empty = LyricsView::from_outcome(Ok("  \n\n ".to_string()));
        let missing = LyricsView::from_outcome(Err(LyricsError::Status(404)));
        let offline = LyricsView::from_outcome(Err(LyricsError::Network("offline".into())));
        assert_eq!(empty, missing);
        assert_eq!(missing, offline);
        assert_eq!(empty.placeholder(), Some(UNAVAILABLE_TEXT));
    }

    #[test]
    fn blank_lines_become_spacers() {
        let view = LyricsView::from_outcome(Ok("first\r\n\r\nsecond\n".to_string()));
        assert_eq!(
            view,
            LyricsView::Lines(vec![
                LyricLine::Text("first".into()),
                LyricLine::Spacer,
                LyricLine::Text("second".into()),
                LyricLine::Spacer,
            ])
        );
    }

    #[test]
    fn begin_shows_loading() {
        let mut state = LyricsState::default();
        let request = state.begin(4, Some("kasi/x.txt".into()));
        assert_eq!(request.song_index, 4);
        assert_eq!(state.view(), &LyricsView::Loading);
        assert_eq!(state.view().placeholder(), Some(LOADING_TEXT));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = LyricsState::default();
        let first = state.begin(0, Some("kasi/a.txt".into()));
        let second = state.begin(1, Some("kasi/b.txt".into()));

        assert!(!state.resolve(&first, Ok("old words".into())));
        assert_eq!(state.view(), &LyricsView::Loading);

        assert!(state.resolve(&second, Ok("new words".into())));
        assert_eq!(
            state.view(),
            &LyricsView::Lines(vec![LyricLine::Text("new words".into())])
        );
    }

    #[test]
    fn reselecting_the_same_song_invalidates_older_requests() {
        let mut state = LyricsState::default();
        let first = state.begin(2, None);
        let _second = state.begin(2, None);
        assert!(!state.resolve(&first, Err(LyricsError::Missing)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn relative_paths_need_an_origin() {
        assert_eq!(resolve_lyrics_url("kasi/a.txt", None), None);
        assert_eq!(
            resolve_lyrics_url("kasi/a.txt", Some("http://localhost:8080/")).as_deref(),
            Some("http://localhost:8080/kasi/a.txt")
        );
        assert_eq!(
            resolve_lyrics_url("https://cdn.example/a.txt", None).as_deref(),
            Some("https://cdn.example/a.txt")
        );
    }
}
