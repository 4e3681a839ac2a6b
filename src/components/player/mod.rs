use crate::components::media_bridge::VIDEO_ELEMENT_ID;
use crate::components::{Icon, PlayerController};
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, ProgressBar, VolumeSlider};

/// The video/cover area with the mode hint and the custom control bar.
#[component]
pub fn Stage() -> Element {
    let player = use_context::<PlayerController>();
    let session = player.session();
    let (layout, cover, title) = {
        let session = session.read();
        (
            session.mode_layout(),
            session.cover().map(str::to_string),
            session.current_song().map(|song| song.title.clone()),
        )
    };
    let bar_visible = layout.custom_bar && player.controls().read().is_visible();
    let hint = player.hint().read().message();

    rsx! {
        div {
            id: "player-container",
            class: "stage",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                player.stage_click();
            },
            video {
                id: VIDEO_ELEMENT_ID,
                class: "stage-video",
                display: if layout.show_video { "block" } else { "none" },
                "playsinline": "true",
                ondoubleclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    evt.stop_propagation();
                },
            }
            div {
                class: "stage-cover",
                display: if layout.show_cover { "flex" } else { "none" },
                {
                    match cover {
                        Some(url) => rsx! {
                            img {
                                id: "cover-img",
                                src: "{url}",
                                alt: title.clone().unwrap_or_default(),
                            }
                        },
                        None => rsx! {
                            div { class: "cover-placeholder",
                                Icon { name: "music".to_string(), class: "icon-large".to_string() }
                            }
                        },
                    }
                }
            }
            if let Some(message) = hint {
                div { id: "mode-hint", class: "mode-hint show", "{message}" }
            }
            div {
                id: "controls",
                class: if bar_visible { "control-bar" } else { "control-bar hidden" },
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                if let Some(title) = title {
                    p { class: "now-playing", "{title}" }
                }
                ProgressBar {}
                div { class: "transport-row",
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    VolumeSlider {}
                }
            }
        }
    }
}
