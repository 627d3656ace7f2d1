use serde::Serialize;
use tokio::sync::broadcast;

/// Notifications published after planning work, forwarded to SSE subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub(crate) enum Event {
    /// A planning request finished; some pools may have been rejected.
    PlanReady {
        pools_planned: u32,
        pools_rejected: u32,
        /// Total configured DDP drives across the planned pools.
        ddp_drives: u64,
    },

    /// A capacity sweep report was generated.
    SweepComplete { rows: u32 },

    /// A request was rejected before any pool was planned.
    DaemonError { message: String },
}

impl Event {
    /// Returns the SSE event type name for this event variant.
    pub(crate) const fn event_type(&self) -> &'static str {
        match self {
            Self::PlanReady { .. } => "plan_ready",
            Self::SweepComplete { .. } => "sweep_complete",
            Self::DaemonError { .. } => "daemon_error",
        }
    }
}

/// The central event broadcast hub.
///
/// Handlers publish via `publish()`; the SSE endpoint subscribes via `subscribe()`.
#[derive(Debug, Clone)]
pub(crate) struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a new EventHub with the given channel capacity.
    ///
    /// Subscribers that fall more than `capacity` events behind miss the
    /// intermediate ones.
    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Errors only when nobody is listening, which callers ignore.
    pub(crate) fn publish(&self, event: Event) -> Result<usize, broadcast::error::SendError<Event>> {
        self.sender.send(event)
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
