use dioxus::core::Task;
use dioxus::prelude::*;

use crate::components::media_bridge::{bridge_delay_ms, seek_to, set_volume, toggle_fullscreen, PlayerSession};
use crate::config::{library, TimingConfig};
use crate::gesture::{ClickDebouncer, ClickOutcome};
use crate::layout::{ControlsAutoHide, ModeHint};
use crate::lyrics::{fetch_lyrics, LyricsRequest};
use crate::session::MediaEvent;
use crate::transport::{seek_target, volume_from_slider};

/// Handle shared through context; every user action on the player goes
/// through here so session writes and delayed tasks stay in one place.
#[derive(Clone, Copy)]
pub struct PlayerController {
    session: Signal<PlayerSession>,
    controls: Signal<ControlsAutoHide>,
    hint: Signal<ModeHint>,
    click: Signal<ClickDebouncer>,
    click_task: Signal<Option<Task>>,
    hint_task: Signal<Option<Task>>,
    hide_task: Signal<Option<Task>>,
    timing: TimingConfig,
}

impl PlayerController {
    pub fn new(
        session: Signal<PlayerSession>,
        controls: Signal<ControlsAutoHide>,
        hint: Signal<ModeHint>,
        click: Signal<ClickDebouncer>,
        tasks: [Signal<Option<Task>>; 3],
        timing: TimingConfig,
    ) -> Self {
        let [click_task, hint_task, hide_task] = tasks;
        Self {
            session,
            controls,
            hint,
            click,
            click_task,
            hint_task,
            hide_task,
            timing,
        }
    }

    pub fn session(&self) -> Signal<PlayerSession> {
        self.session
    }

    pub fn controls(&self) -> Signal<ControlsAutoHide> {
        self.controls
    }

    pub fn hint(&self) -> Signal<ModeHint> {
        self.hint
    }

    pub fn load(&self, index: usize) {
        let mut session = self.session;
        let request = session.write().load_song(index);
        self.request_lyrics(request);
    }

    pub fn next(&self) {
        let mut session = self.session;
        let request = session.write().next();
        self.request_lyrics(request);
    }

    pub fn previous(&self) {
        let mut session = self.session;
        let request = session.write().previous();
        self.request_lyrics(request);
    }

    pub fn toggle_play_pause(&self) {
        let mut session = self.session;
        session.write().toggle_play_pause();
    }

    pub fn dispatch(&self, event: MediaEvent) {
        let mut session = self.session;
        let request = session.write().handle_event(event);
        self.request_lyrics(request);
    }

    pub fn toggle_mode(&self) {
        let mut session = self.session;
        let mut controls = self.controls;
        let mut hint = self.hint;

        let message = session.write().toggle_mode();
        let is_mv_mode = session.peek().is_mv_mode();
        replace_task(self.hide_task, None);
        controls.write().mode_changed(is_mv_mode);

        let token = hint.write().show(message);
        let window = self.timing.mode_hint_ms;
        let task = spawn(async move {
            bridge_delay_ms(window).await;
            hint.write().dismiss(token);
        });
        replace_task(self.hint_task, Some(task));
    }

    /// Click on the stage: a pair inside the window toggles the mode, a lone
    /// click acts on playback once the window has passed.
    pub fn stage_click(&self) {
        let mut click = self.click;
        let outcome = click.write().click();
        match outcome {
            ClickOutcome::Double => {
                replace_task(self.click_task, None);
                self.toggle_mode();
            }
            ClickOutcome::Pending(token) => {
                let mut session = self.session;
                let window = self.timing.double_click_window_ms;
                let task = spawn(async move {
                    bridge_delay_ms(window).await;
                    let fire = click.write().expire(token);
                    if fire {
                        session.write().primary_click();
                    }
                });
                replace_task(self.click_task, Some(task));
            }
        }
    }

    pub fn pointer_moved(&self) {
        let session = self.session;
        let mut controls = self.controls;
        let is_mv_mode = session.peek().is_mv_mode();
        let Some(token) = controls.write().pointer_moved(is_mv_mode) else {
            return;
        };

        let idle = self.timing.controls_idle_ms;
        let task = spawn(async move {
            bridge_delay_ms(idle).await;
            let is_mv_mode = session.peek().is_mv_mode();
            controls.write().hide_elapsed(token, is_mv_mode);
        });
        replace_task(self.hide_task, Some(task));
    }

    pub fn key_pressed(&self, key: &str) {
        if self.session.peek().wants_fullscreen(key) {
            toggle_fullscreen();
        }
    }

    pub fn seek_percent(&self, percent: f64) {
        let duration = self.session.peek().duration();
        if let Some(position) = seek_target(percent, duration) {
            seek_to(position);
        }
    }

    pub fn set_volume_slider(&self, value: f64) {
        set_volume(volume_from_slider(value));
    }

    fn request_lyrics(&self, request: Option<LyricsRequest>) {
        let Some(request) = request else {
            return;
        };
        let mut session = self.session;
        let origin = library().media.lyrics_origin.clone();
        spawn(async move {
            let outcome = fetch_lyrics(&request, origin.as_deref()).await;
            session.write().resolve_lyrics(&request, outcome);
        });
    }
}

fn replace_task(mut slot: Signal<Option<Task>>, task: Option<Task>) {
    let previous = std::mem::take(&mut *slot.write());
    if let Some(previous) = previous {
        previous.cancel();
    }
    slot.set(task);
}
