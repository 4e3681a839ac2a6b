//! Lyrics for the current song, one paragraph per source line.

use crate::components::PlayerController;
use crate::lyrics::{LyricLine, LyricsView};
use dioxus::prelude::*;

const NBSP: &str = "\u{a0}";

#[component]
pub fn LyricsPanel() -> Element {
    let player = use_context::<PlayerController>();
    let view = player.session().read().lyrics().view().clone();

    rsx! {
        div { id: "lyrics-content", class: "lyrics-content",
            {
                match view {
                    LyricsView::Lines(lines) => rsx! {
                        for (position, line) in lines.into_iter().enumerate() {
                            {
                                match line {
                                    LyricLine::Text(text) => rsx! {
                                        p { key: "{position}", class: "lyrics-line", "{text}" }
                                    },
                                    LyricLine::Spacer => rsx! {
                                        p { key: "{position}", class: "lyrics-line lyrics-spacer", "{NBSP}" }
                                    },
                                }
                            }
                        }
                    },
                    LyricsView::Idle => rsx! {},
                    other => {
                        let text = other.placeholder().unwrap_or_default();
                        rsx! {
                            p { class: "lyrics-placeholder", "{text}" }
                        }
                    }
                }
            }
        }
    }
}
