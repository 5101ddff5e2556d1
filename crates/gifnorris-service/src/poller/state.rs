use crate::error::RequestError;

/// Why a poll loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Cancelled,
    Failed(RequestError),
}

/// Phase of one poll loop.
///
/// `Idle → Fetching → Waiting → Fetching → … → Terminated`. Nothing leaves
/// `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
    Waiting,
    Terminated(Termination),
}

impl PollState {
    pub fn is_terminated(&self) -> bool {
        matches!(self, PollState::Terminated(_))
    }

    pub fn termination(&self) -> Option<Termination> {
        match self {
            PollState::Terminated(termination) => Some(*termination),
            _ => None,
        }
    }
}
