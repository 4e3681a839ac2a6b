use crate::components::{Icon, PlayerController};
use crate::session::TransportIcon;
use crate::transport::{format_time, progress_percent};
use dioxus::prelude::*;

/// Play/Pause button - icon follows the state after the toggle
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let player = use_context::<PlayerController>();
    let icon = player.session().read().transport_icon();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "transport-main",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                player.toggle_play_pause();
            },
            {
                match icon {
                    TransportIcon::Pause => rsx! {
                        Icon { name: "pause".to_string(), class: "icon".to_string() }
                    },
                    TransportIcon::Play => rsx! {
                        Icon { name: "play".to_string(), class: "icon".to_string() }
                    },
                }
            }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let player = use_context::<PlayerController>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "transport-button",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                player.previous();
            },
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let player = use_context::<PlayerController>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "transport-button",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                player.next();
            },
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Progress slider with elapsed/total labels
#[component]
pub(super) fn ProgressBar() -> Element {
    let player = use_context::<PlayerController>();
    let (position, duration) = {
        let session = player.session();
        let session = session.read();
        (session.position(), session.duration())
    };
    let percent = progress_percent(position, duration);

    rsx! {
        div { class: "progress-row",
            span { id: "current-time", class: "time-label", "{format_time(position)}" }
            input {
                id: "progress",
                r#type: "range",
                min: "0",
                max: "100",
                step: "0.1",
                value: "{percent}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                oninput: move |evt: Event<FormData>| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        player.seek_percent(value);
                    }
                },
            }
            span { id: "duration", class: "time-label", "{format_time(duration)}" }
        }
    }
}

#[component]
pub(super) fn VolumeSlider() -> Element {
    let player = use_context::<PlayerController>();
    let mut level = use_signal(|| 100.0f64);

    rsx! {
        div { class: "volume-row",
            Icon { name: "volume".to_string(), class: "icon-small".to_string() }
            input {
                id: "volume",
                r#type: "range",
                min: "0",
                max: "100",
                value: "{level}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                oninput: move |evt: Event<FormData>| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        level.set(value.clamp(0.0, 100.0));
                        player.set_volume_slider(value);
                    }
                },
            }
        }
    }
}
