//! Sidebar geometry, panel selection and the transient overlays on the stage.

use crate::config::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidePanel {
    #[default]
    Playlist,
    Lyrics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_x: f64,
    start_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarLayout {
    bounds: LayoutConfig,
    width: f64,
    last_expanded_width: f64,
    collapsed: bool,
    panel: SidePanel,
    drag: Option<DragState>,
}

impl SidebarLayout {
    pub fn new(bounds: LayoutConfig) -> Self {
        let width = bounds
            .sidebar_default_width
            .clamp(bounds.sidebar_min_width, bounds.sidebar_max_width);
        Self {
            bounds,
            width,
            last_expanded_width: width,
            collapsed: false,
            panel: SidePanel::Playlist,
            drag: None,
        }
    }

    /// Rendered width in pixels; zero while collapsed.
    pub fn width(&self) -> f64 {
        if self.collapsed {
            0.0
        } else {
            self.width
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn panel(&self) -> SidePanel {
        self.panel
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn toggle_collapsed(&mut self) {
        if self.collapsed {
            self.collapsed = false;
            self.width = self.last_expanded_width;
        } else {
            self.drag = None;
            self.last_expanded_width = self.width;
            self.collapsed = true;
        }
    }

    pub fn show_playlist(&mut self) {
        self.panel = SidePanel::Playlist;
    }

    pub fn show_lyrics(&mut self) {
        self.panel = SidePanel::Lyrics;
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.collapsed {
            return;
        }
        self.drag = Some(DragState {
            start_x: pointer_x,
            start_width: self.width,
        });
    }

    /// Applies pointer movement. Returns `true` when a drag is in progress.
    pub fn drag_to(&mut self, pointer_x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !pointer_x.is_finite() {
            return true;
        }
        self.width = (drag.start_width + (pointer_x - drag.start_x))
            .clamp(self.bounds.sidebar_min_width, self.bounds.sidebar_max_width);
        true
    }

    /// Pointer released anywhere on the page.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

/// Shows the custom control bar on pointer movement and hides it after an
/// idle window. Only active in music mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsAutoHide {
    visible: bool,
    generation: u64,
}

impl ControlsAutoHide {
    pub fn new(is_mv_mode: bool) -> Self {
        Self {
            visible: !is_mv_mode,
            generation: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the token to hand to [`ControlsAutoHide::hide_elapsed`] once the
    /// idle window has passed, or `None` in MV mode.
    pub fn pointer_moved(&mut self, is_mv_mode: bool) -> Option<u64> {
        if is_mv_mode {
            return None;
        }
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    pub fn hide_elapsed(&mut self, token: u64, is_mv_mode: bool) {
        if !is_mv_mode && token == self.generation {
            self.visible = false;
        }
    }

    /// Entering music mode reveals the bar; pending hides are dropped.
    pub fn mode_changed(&mut self, is_mv_mode: bool) {
        self.generation = self.generation.wrapping_add(1);
        self.visible = !is_mv_mode;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModeHint {
    message: Option<&'static str>,
    generation: u64,
}

impl ModeHint {
    pub fn show(&mut self, message: &'static str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message);
        self.generation
    }

    pub fn dismiss(&mut self, token: u64) {
        if token == self.generation {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}
