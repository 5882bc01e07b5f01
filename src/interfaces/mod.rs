/// What happened when a link was handed to the platform.
///
/// Only the hand-off is observed. `Launched` does not mean the number
/// exists or is registered, just that something accepted the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched,
    /// Nothing on this system can open the link.
    NoHandler,
    /// Any other failure, with its description.
    OtherFailure(String),
}

/// The platform's "open this URI" facility. Implementations are swapped
/// in by the front-end, a recording one is used in tests.
pub trait LinkLauncher {
    fn launch(&self, url: &str) -> LaunchOutcome;
}

/// Millisecond clock feeding the exit gate.
pub trait Clock {
    fn now_ms(&self) -> u64;
}
