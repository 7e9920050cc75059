/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Lightweight status event bus shared between the quality core and its
//! rendering consumers. Works on both native and `wasm32` targets.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Subsystem tag used by the connection indicator core.
pub const CONNECTION_INDICATOR_SUBSYSTEM: &str = "connection-indicator";

// === Status event data structures ===

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusEvent {
    /// Sub-system that produced this event (e.g. "connection-indicator").
    pub subsystem: &'static str,
    /// Participant the event refers to, if any.
    pub participant: Option<String>,
    /// Unix time in milliseconds when the event was produced.
    pub ts_ms: u64,
    /// What happened.
    pub kind: StatusKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusKind {
    /// The participant's display tier changed.
    TierChanged {
        previous: Option<String>,
        current: String,
    },
    /// A "connection is low" notification was shown for the participant.
    NotificationShown { handle: u64 },
    /// A previously shown notification was dismissed.
    NotificationDismissed { handle: u64 },
    /// The participant left and its indicator state was torn down.
    ParticipantRemoved,
}

// === Simple global broadcast bus (flume multi-producer multi-consumer) ===

use flume::{Receiver, Sender};

static BUS: Lazy<(Sender<StatusEvent>, Receiver<StatusEvent>)> = Lazy::new(flume::unbounded);

/// Obtain a sender that can publish status events.
pub fn global_sender() -> &'static Sender<StatusEvent> {
    &BUS.0
}

/// Subscribe to the status stream. Each subscriber receives **all** future events.
pub fn subscribe() -> Receiver<StatusEvent> {
    BUS.1.clone()
}

// === Helper utilities ===

/// Current wall-clock time in milliseconds.
pub fn now_ms() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl StatusEvent {
    /// Convenience constructor stamping the current time.
    pub fn now(subsystem: &'static str, participant: Option<String>, kind: StatusKind) -> Self {
        Self {
            subsystem,
            participant,
            ts_ms: now_ms(),
            kind,
        }
    }
}
