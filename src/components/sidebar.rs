use crate::components::{Icon, LyricsPanel, PlayerController};
use crate::layout::{SidePanel, SidebarLayout};
use crate::playlist::Playlist;
use dioxus::prelude::*;

/// A sidebar row: the song it loads when clicked and whether it is highlighted.
#[derive(Debug, Clone, PartialEq)]
struct RowView {
    index: usize,
    title: String,
    active: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct SectionView {
    name: String,
    rows: Vec<RowView>,
}

fn section_views(playlist: &Playlist, active: Option<usize>) -> Vec<SectionView> {
    playlist
        .sections()
        .iter()
        .map(|section| SectionView {
            name: section.name.clone(),
            rows: section
                .entries
                .iter()
                .map(|entry| RowView {
                    index: entry.index,
                    title: entry.title.clone(),
                    active: active == Some(entry.index),
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn Sidebar() -> Element {
    let player = use_context::<PlayerController>();
    let mut layout = use_context::<Signal<SidebarLayout>>();
    let session = player.session();

    let (width, collapsed, panel, dragging) = {
        let layout = layout.read();
        (layout.width(), layout.is_collapsed(), layout.panel(), layout.is_dragging())
    };
    let (sections, song_count) = {
        let session = session.read();
        let playlist = session.playlist();
        (section_views(playlist, session.active_index()), playlist.len())
    };

    rsx! {
        aside {
            id: "sidebar",
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },
            width: "{width}px",
            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    h1 { "Kasi Player" }
                    p { class: "sidebar-meta", "{song_count} songs" }
                }
                div { class: "sidebar-tabs",
                    TabButton {
                        id: "toggleView",
                        icon: "playlist",
                        label: "Playlist",
                        active: panel == SidePanel::Playlist,
                        onclick: move |_| layout.write().show_playlist(),
                    }
                    TabButton {
                        id: "toggleLyrics",
                        icon: "lyrics",
                        label: "Lyrics",
                        active: panel == SidePanel::Lyrics,
                        onclick: move |_| layout.write().show_lyrics(),
                    }
                }
            }
            div {
                id: "playlist-container",
                class: "sidebar-panel",
                display: if panel == SidePanel::Playlist { "block" } else { "none" },
                for SectionView { name, rows } in sections {
                    div { key: "{name}", class: "category-group",
                        h2 { class: "category", "{name}" }
                        ul { class: "category-songs",
                            for row in rows {
                                PlaylistRow {
                                    key: "{row.index}",
                                    index: row.index,
                                    title: row.title,
                                    active: row.active,
                                }
                            }
                        }
                    }
                }
            }
            div {
                id: "lyrics-container",
                class: "sidebar-panel",
                display: if panel == SidePanel::Lyrics { "block" } else { "none" },
                LyricsPanel {}
            }
        }
        if !collapsed {
            div {
                id: "resize-handle",
                class: if dragging { "resize-handle dragging" } else { "resize-handle" },
                onpointerdown: move |evt: PointerEvent| {
                    evt.prevent_default();
                    layout.write().begin_drag(evt.client_coordinates().x);
                },
            }
        }
    }
}

/// One song row. The index is fixed when the row is built.
#[component]
fn PlaylistRow(index: usize, title: String, active: bool) -> Element {
    let player = use_context::<PlayerController>();

    rsx! {
        li {
            class: if active { "song active" } else { "song" },
            "data-global-index": "{index}",
            onclick: move |_| player.load(index),
            "{title}"
        }
    }
}

#[component]
fn TabButton(
    id: String,
    icon: String,
    label: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: if active { "tab active" } else { "tab" },
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "icon-small".to_string() }
            span { "{label}" }
        }
    }
}
