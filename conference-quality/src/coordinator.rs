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

//! Per-participant "connection is low" notification coordination.
//!
//! Each participant owns a tiny two-state machine (`Clear` / `Notified`).
//! Entering a degraded tier emits a create-notification effect with a fresh
//! handle; returning to a healthy tier emits a dismiss effect for the stored
//! handle. Staying degraded emits nothing, which suppresses duplicate toasts.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::QualityTier;

/// Opaque token for one outstanding user-facing alert. At most one is live
/// per participant at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationHandle(u64);

impl NotificationHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Effect the caller must apply to the downstream notification system.
///
/// Both downstream operations are fire-and-forget: dismissing a handle the
/// notification system no longer recognizes must be treated as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEffect {
    /// Nothing to do.
    None,
    /// Show a "participant's connection is low" notification.
    Show {
        handle: NotificationHandle,
        participant: String,
        display_name: String,
    },
    /// Dismiss a previously shown notification.
    Dismiss { handle: NotificationHandle },
}

impl NotificationEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, NotificationEffect::None)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CoordinatorOptions {
    /// Swallow create-notification effects (waiting-room mode). State is
    /// still tracked so a later recovery dismisses cleanly.
    pub suppress_notifications: bool,
}

/// Stateful wrapper around the classifier output that deduplicates
/// "connection is low" notifications per participant.
#[derive(Debug, Default)]
pub struct NotificationCoordinator {
    /// Participants currently in the `Notified` state, with their live handle.
    /// Absence from the map means `Clear`.
    outstanding: HashMap<String, NotificationHandle>,
    next_handle: u64,
    options: CoordinatorOptions,
}

impl NotificationCoordinator {
    pub fn new(options: CoordinatorOptions) -> Self {
        Self {
            outstanding: HashMap::new(),
            next_handle: 0,
            options,
        }
    }

    /// Feed one tier evaluation for a participant.
    ///
    /// Called on every tier re-computation; the internal state machine
    /// makes repeated degraded (or healthy) evaluations a no-op, so callers
    /// do not need to diff tiers themselves.
    pub fn on_tier_changed(
        &mut self,
        participant: &str,
        display_name: &str,
        tier: &QualityTier,
    ) -> NotificationEffect {
        if tier.is_degraded() {
            // Still degraded with a live handle: no duplicate toast.
            if self.outstanding.contains_key(participant) {
                return NotificationEffect::None;
            }
            let handle = self.allocate_handle();
            self.outstanding.insert(participant.to_string(), handle);
            if self.options.suppress_notifications {
                debug!(
                    "suppressing low-connection notification for {participant} ({})",
                    tier.color_class
                );
                return NotificationEffect::None;
            }
            debug!(
                "low-connection notification for {participant} ({}), handle {}",
                tier.color_class,
                handle.id()
            );
            NotificationEffect::Show {
                handle,
                participant: participant.to_string(),
                display_name: display_name.to_string(),
            }
        } else {
            match self.outstanding.remove(participant) {
                Some(handle) => {
                    debug!(
                        "connection recovered for {participant}, dismissing handle {}",
                        handle.id()
                    );
                    NotificationEffect::Dismiss { handle }
                }
                // Healthy and clear.
                None => NotificationEffect::None,
            }
        }
    }

    /// Teardown path for a participant that left the conference. Dismisses
    /// the outstanding notification regardless of tier and drops all state,
    /// so a rejoin with the same key starts a fresh episode.
    pub fn remove_participant(&mut self, participant: &str) -> NotificationEffect {
        match self.outstanding.remove(participant) {
            Some(handle) => {
                debug!(
                    "participant {participant} left, dismissing handle {}",
                    handle.id()
                );
                NotificationEffect::Dismiss { handle }
            }
            None => NotificationEffect::None,
        }
    }

    /// Whether a participant currently has a live notification handle.
    pub fn has_outstanding(&self, participant: &str) -> bool {
        self.outstanding.contains_key(participant)
    }

    fn allocate_handle(&mut self) -> NotificationHandle {
        self.next_handle += 1;
        NotificationHandle(self.next_handle)
    }
}
