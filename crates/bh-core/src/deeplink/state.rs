/// Deep-link router lifecycle
///
/// Pure state definitions; the pending queue and the asynchronous driving
/// logic live in the application layer (bh-app).
///
/// State transitions:
/// ```text
/// Uninitialized
///  │ initial URL captured (may be none)
///  ▼
/// AwaitingMount ── navigation tree mounted ──► Idle
///                                               │ link dequeued
///                                               ▼
///                                           Navigating ── transition done ──► Idle
/// ```
///
/// Links arriving before `Idle` are queued; links arriving while
/// `Navigating` queue FIFO behind the in-flight one. The underlying
/// navigation tree can only process one transition at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterPhase {
    /// Process just started; the initial URL has not been queried yet.
    Uninitialized,

    /// Initial URL captured, navigation tree not mounted yet.
    AwaitingMount,

    /// Mounted, no navigation in flight.
    Idle,

    /// A two-step navigation is in flight.
    Navigating,
}

impl RouterPhase {
    /// Whether the navigation tree exists and links may be dispatched.
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Idle | Self::Navigating)
    }

    /// Whether a dequeued link may start navigating right now.
    pub fn can_dispatch(self) -> bool {
        self == Self::Idle
    }
}
