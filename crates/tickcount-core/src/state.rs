/// Ticker lifecycle. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    /// Constructed, no schedule registered yet.
    Idle,
    /// Schedule registered, counter below its bound.
    Running,
    /// Bound reached and schedule released.
    Done,
}

impl TickerState {
    pub fn as_str(self) -> &'static str {
        match self {
            TickerState::Idle => "idle",
            TickerState::Running => "running",
            TickerState::Done => "done",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TickerState::Done)
    }
}
