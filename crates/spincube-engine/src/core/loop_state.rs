use super::app::AppControl;

/// Frame loop state machine.
///
/// `ShouldClose` is terminal: once entered, no further transition leaves it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    ShouldClose,
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }

    /// Requests the terminal state.
    pub fn close(&mut self) {
        *self = LoopState::ShouldClose;
    }

    /// Folds a callback's control directive into the state.
    pub fn apply(&mut self, control: AppControl) {
        if control == AppControl::Exit {
            self.close();
        }
    }
}
