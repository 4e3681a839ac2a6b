//! Single vs. double click disambiguation for the stage.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    #[default]
    Idle,
    AwaitingSecond { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click of a possible pair. Schedule [`ClickDebouncer::expire`] with
    /// this token after the window.
    Pending(u64),
    /// Second click inside the window; the pending single click is dropped.
    Double,
}

#[derive(Debug, Clone, Default)]
pub struct ClickDebouncer {
    state: ClickState,
    last_token: u64,
}

impl ClickDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> ClickState {
        self.state
    }

    pub fn click(&mut self) -> ClickOutcome {
        match self.state {
            ClickState::AwaitingSecond { .. } => {
                self.state = ClickState::Idle;
                ClickOutcome::Double
            }
            ClickState::Idle => {
                self.last_token = self.last_token.wrapping_add(1);
                self.state = ClickState::AwaitingSecond {
                    token: self.last_token,
                };
                ClickOutcome::Pending(self.last_token)
            }
        }
    }

    /// The window for `token` ran out. Returns `true` when the single click
    /// should fire.
    pub fn expire(&mut self, token: u64) -> bool {
        match self.state {
            ClickState::AwaitingSecond { token: pending } if pending == token => {
                self.state = ClickState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_click_fires_after_the_window() {
        let mut debouncer = ClickDebouncer::new();
        let ClickOutcome::Pending(token) = debouncer.click() else {
            panic!("first click should be pending");
        };
        assert!(debouncer.expire(token));
        assert_eq!(debouncer.state(), ClickState::Idle);
    }

    #[test]
    fn double_click_cancels_the_single() {
        let mut debouncer = ClickDebouncer::new();
        let ClickOutcome::Pending(token) = debouncer.click() else {
            panic!("first click should be pending");
        };
        assert_eq!(debouncer.click(), ClickOutcome::Double);
        assert!(!debouncer.expire(token));
    }

    #[test]
    fn old_timer_does_not_fire_a_newer_click() {
        let mut debouncer = ClickDebouncer::new();
        let ClickOutcome::Pending(first) = debouncer.click() else {
            panic!("first click should be pending");
        };
        debouncer.click();
        let ClickOutcome::Pending(third) = debouncer.click() else {
            panic!("click after a pair should be pending");
        };
        assert!(!debouncer.expire(first));
        assert!(debouncer.expire(third));
    }
}
