//! Page-side bridge to the `<video>` element and hls.js.
//!
//! Commands are fire-and-forget evals; events queue up in the page and are
//! drained by the polling task in the app shell.

use crate::session::{MediaBackend, MediaEvent, PlaybackSession, StreamId};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

pub const VIDEO_ELEMENT_ID: &str = "kasi-video";
pub const EVENT_POLL_MS: u32 = 100;

pub type PlayerSession = PlaybackSession<BridgeMedia>;

const BRIDGE_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__kasiBridge) {
    return true;
  }

  const HLS_LOAD_TIMEOUT_MS = 8000;
  const queue = [];
  const streams = new Map();
  const installedAt = Date.now();
  let hlsFailed = false;
  let reportedCapabilities = "";
  let source = 0;

  const push = (event) => queue.push(event);
  const finite = (value) => (Number.isFinite(value) ? value : 0);
  const video = () => document.getElementById("kasi-video");

  const bind = (el) => {
    if (el.__kasiBound) return;
    el.__kasiBound = true;
    const time = () =>
      push({ type: "time", source, current: finite(el.currentTime), duration: finite(el.duration) });
    el.addEventListener("play", () => push({ type: "play" }));
    el.addEventListener("pause", () => push({ type: "pause" }));
    el.addEventListener("ended", () => push({ type: "ended", source }));
    el.addEventListener("loadedmetadata", () => push({ type: "loaded_metadata", source }));
    el.addEventListener("timeupdate", time);
    el.addEventListener("durationchange", time);
  };

  const errorKind = (data) => {
    if (!data || typeof Hls === "undefined") return "other";
    if (data.type === Hls.ErrorTypes.NETWORK_ERROR) return "network";
    if (data.type === Hls.ErrorTypes.MEDIA_ERROR) return "media";
    return "other";
  };

  const capabilities = (el) => ({
    type: "capabilities",
    adaptive: typeof Hls !== "undefined" && Hls.isSupported(),
    native: !!el.canPlayType && el.canPlayType("application/vnd.apple.mpegurl") !== "",
  });

  const watchHlsScript = () => {
    for (const script of document.querySelectorAll('script[src*="hls"]')) {
      if (script.__kasiWatched) continue;
      script.__kasiWatched = true;
      script.addEventListener("error", () => {
        hlsFailed = true;
      });
    }
  };

  // Capabilities are final once hls.js is loaded, failed, or overdue.
  const capabilitiesSettled = () =>
    typeof Hls !== "undefined" || hlsFailed || Date.now() - installedAt >= HLS_LOAD_TIMEOUT_MS;

  const apply = (cmd) => {
    const el = video();
    if (!el || !cmd) return false;
    bind(el);

    switch (cmd.type) {
      case "open": {
        if (typeof Hls === "undefined") return false;
        const hls = new Hls();
        streams.set(cmd.id, hls);
        source = cmd.id;
        hls.on(Hls.Events.MANIFEST_PARSED, () => push({ type: "manifest_parsed", stream: cmd.id }));
        hls.on(Hls.Events.ERROR, (_event, data) =>
          push({ type: "stream_error", stream: cmd.id, fatal: !!(data && data.fatal), kind: errorKind(data) })
        );
        hls.loadSource(cmd.url);
        hls.attachMedia(el);
        break;
      }
      case "start_load": {
        const hls = streams.get(cmd.id);
        if (hls) hls.startLoad();
        break;
      }
      case "recover_media_error": {
        const hls = streams.get(cmd.id);
        if (hls) hls.recoverMediaError();
        break;
      }
      case "destroy": {
        const hls = streams.get(cmd.id);
        if (hls) {
          hls.destroy();
          streams.delete(cmd.id);
        }
        break;
      }
      case "source":
        source = cmd.id;
        el.src = cmd.url;
        break;
      case "play":
        // A refused play() fires no pause event.
        el.play().catch(() => push({ type: "pause" }));
        break;
      case "pause":
        el.pause();
        break;
      case "controls":
        el.controls = !!cmd.enabled;
        break;
      case "seek":
        if (Number.isFinite(cmd.position)) el.currentTime = Math.max(0, cmd.position);
        break;
      case "volume":
        if (Number.isFinite(cmd.volume)) el.volume = Math.min(1, Math.max(0, cmd.volume));
        break;
      case "alert":
        window.alert(cmd.message);
        break;
      case "fullscreen":
        if (document.fullscreenElement) {
          document.exitFullscreen().catch(() => {});
        } else if (document.documentElement.requestFullscreen) {
          document.documentElement.requestFullscreen().catch(() => {});
        }
        break;
      default:
        return false;
    }
    return true;
  };

  const drain = () => {
    const el = video();
    if (el) {
      bind(el);
      watchHlsScript();
      if (capabilitiesSettled()) {
        const current = capabilities(el);
        const key = `${current.adaptive}:${current.native}`;
        if (key !== reportedCapabilities) {
          reportedCapabilities = key;
          queue.unshift(current);
        }
      }
    }
    return queue.splice(0, queue.length);
  };

  window.__kasiBridge = { apply, drain };
  return true;
})();
"#;

fn ensure_bridge() {
    let _ = document::eval(BRIDGE_BOOTSTRAP_JS);
}

fn bridge_command(value: serde_json::Value) {
    ensure_bridge();
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__kasiBridge;
            if (!bridge) return false;
            return bridge.apply({payload});
        }})();"#
    );
    let _ = document::eval(&script);
}

/// Pulls every media event queued in the page since the last call.
pub async fn drain_media_events() -> Vec<MediaEvent> {
    ensure_bridge();
    let eval = document::eval(
        r#"return (function () {
            const bridge = window.__kasiBridge;
            return bridge ? bridge.drain() : [];
        })();"#,
    );
    let Ok(raw) = eval.join::<Vec<serde_json::Value>>().await else {
        return Vec::new();
    };
    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<MediaEvent>(value) {
            Ok(event) => Some(event),
            Err(err) => {
                debug!("skipping malformed media event: {err}");
                None
            }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub async fn bridge_delay_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn bridge_delay_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

pub fn seek_to(position: f64) {
    bridge_command(serde_json::json!({ "type": "seek", "position": position.max(0.0) }));
}

pub fn set_volume(volume: f64) {
    bridge_command(serde_json::json!({ "type": "volume", "volume": volume }));
}

pub fn toggle_fullscreen() {
    bridge_command(serde_json::json!({ "type": "fullscreen" }));
}

/// [`MediaBackend`] that drives the page through the bridge script.
#[derive(Debug, Default, Clone, Copy)]
pub struct BridgeMedia;

impl MediaBackend for BridgeMedia {
    fn open_stream(&mut self, id: StreamId, url: &str) {
        bridge_command(serde_json::json!({ "type": "open", "id": id, "url": url }));
    }

    fn start_load(&mut self, id: StreamId) {
        bridge_command(serde_json::json!({ "type": "start_load", "id": id }));
    }

    fn recover_media_error(&mut self, id: StreamId) {
        bridge_command(serde_json::json!({ "type": "recover_media_error", "id": id }));
    }

    fn destroy_stream(&mut self, id: StreamId) {
        bridge_command(serde_json::json!({ "type": "destroy", "id": id }));
    }

    fn set_source(&mut self, id: StreamId, url: &str) {
        bridge_command(serde_json::json!({ "type": "source", "id": id, "url": url }));
    }

    fn play(&mut self) {
        bridge_command(serde_json::json!({ "type": "play" }));
    }

    fn pause(&mut self) {
        bridge_command(serde_json::json!({ "type": "pause" }));
    }

    fn set_native_controls(&mut self, enabled: bool) {
        bridge_command(serde_json::json!({ "type": "controls", "enabled": enabled }));
    }

    fn alert(&mut self, message: &str) {
        bridge_command(serde_json::json!({ "type": "alert", "message": message }));
    }
}
