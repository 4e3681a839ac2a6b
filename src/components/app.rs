use crate::components::media_bridge::{
    bridge_delay_ms, drain_media_events, BridgeMedia, EVENT_POLL_MS,
};
use crate::components::{Icon, PlayerController, Sidebar, Stage};
use crate::config::library;
use crate::gesture::ClickDebouncer;
use crate::layout::{ControlsAutoHide, ModeHint, SidebarLayout};
use crate::playlist::Playlist;
use crate::session::PlaybackSession;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::core::Task;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[component]
pub fn AppShell() -> Element {
    let config = library();

    let session = use_signal(|| {
        let playlist = Playlist::build(&config.categories, &config.media);
        PlaybackSession::new(playlist, BridgeMedia)
    });
    let mut layout = use_signal(|| SidebarLayout::new(config.layout));
    let controls = use_signal(|| ControlsAutoHide::new(true));
    let hint = use_signal(ModeHint::default);
    let click = use_signal(ClickDebouncer::new);
    let click_task = use_signal(|| None::<Task>);
    let hint_task = use_signal(|| None::<Task>);
    let hide_task = use_signal(|| None::<Task>);

    let player = use_context_provider(|| {
        PlayerController::new(
            session,
            controls,
            hint,
            click,
            [click_task, hint_task, hide_task],
            config.timing,
        )
    });
    use_context_provider(|| layout);

    // Load the first song and start pumping page events into the session.
    use_effect(move || {
        let songs = session.peek().playlist().len();
        info!("Player ready with {songs} songs");
        if songs > 0 {
            player.load(0);
        }
        spawn(async move {
            loop {
                bridge_delay_ms(EVENT_POLL_MS).await;
                for event in drain_media_events().await {
                    player.dispatch(event);
                }
            }
        });
    });

    // A drag released outside the page still has to end.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let Some(win) = window() else {
            return;
        };
        let runtime = Runtime::current();

        let up_cb = {
            let runtime_up = runtime.clone();
            Closure::wrap(Box::new(move |_e: web_sys::PointerEvent| {
                let _guard = RuntimeGuard::new(runtime_up.clone());
                if layout.peek().is_dragging() {
                    layout.write().end_drag();
                }
            }) as Box<dyn FnMut(_)>)
        };

        let _ = win.add_event_listener_with_callback("pointerup", up_cb.as_ref().unchecked_ref());
        let _ = win
            .add_event_listener_with_callback("pointercancel", up_cb.as_ref().unchecked_ref());

        up_cb.forget();
    });

    let on_pointer_move = move |evt: PointerEvent| {
        if layout.peek().is_dragging() {
            layout.write().drag_to(evt.client_coordinates().x);
        }
        player.pointer_moved();
    };

    let on_pointer_up = move |_| {
        if layout.peek().is_dragging() {
            layout.write().end_drag();
        }
    };

    let on_key_down = move |evt: KeyboardEvent| {
        player.key_pressed(&evt.key().to_string());
    };

    let collapsed = layout.read().is_collapsed();
    let dragging = layout.read().is_dragging();

    rsx! {
        div {
            id: "main",
            class: if dragging { "app-shell resizing" } else { "app-shell" },
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onpointermove: on_pointer_move,
            onpointerup: on_pointer_up,
            onkeydown: on_key_down,
            Sidebar {}
            div { class: "stage-column",
                button {
                    id: "toggleSidebar",
                    r#type: "button",
                    class: "sidebar-toggle",
                    aria_label: if collapsed { "Show sidebar" } else { "Hide sidebar" },
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        layout.write().toggle_collapsed();
                    },
                    Icon { name: "menu".to_string(), class: "icon".to_string() }
                }
                Stage {}
            }
        }
    }
}
