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

//! Composition layer tying the classifier and the notification coordinator
//! together. Consumers feed per-participant [`ConnectionState`] samples in
//! and get the display tier plus the notification effect to apply back out.
//! Tier changes and notification lifecycle are published on the global
//! status bus as a side channel for UI layers and log sinks.

use std::collections::HashMap;

use log::debug;
use web_time::{Duration, Instant};

use conference_events::{
    global_sender, StatusEvent, StatusKind, CONNECTION_INDICATOR_SUBSYSTEM,
};

use crate::classifier::{ClassifierConfig, QualityClassifier, QualityTier, TierId};
use crate::connection_state::ConnectionState;
use crate::coordinator::{CoordinatorOptions, NotificationCoordinator, NotificationEffect};
use crate::error::Result;

/// Participants that stop reporting for this long are considered gone by
/// [`ConnectionMonitor::prune_stale`].
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Default)]
pub struct MonitorOptions {
    pub classifier: ClassifierConfig,
    pub coordinator: CoordinatorOptions,
}

#[derive(Debug)]
struct ParticipantEntry {
    display_name: Option<String>,
    last_tier: Option<TierId>,
    last_update: Instant,
}

impl ParticipantEntry {
    fn new() -> Self {
        Self {
            display_name: None,
            last_tier: None,
            last_update: Instant::now(),
        }
    }
}

/// Result of feeding one connection-state sample through the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub tier: &'static QualityTier,
    pub effect: NotificationEffect,
}

/// Owns the per-participant indicator state for one conference view.
///
/// Single-threaded and purely reactive: everything happens synchronously
/// inside [`update`](Self::update), driven by upstream state changes. No
/// timers of its own.
#[derive(Debug)]
pub struct ConnectionMonitor {
    classifier: QualityClassifier,
    coordinator: NotificationCoordinator,
    participants: HashMap<String, ParticipantEntry>,
}

impl ConnectionMonitor {
    pub fn new(options: MonitorOptions) -> Result<Self> {
        Ok(Self {
            classifier: QualityClassifier::new(options.classifier)?,
            coordinator: NotificationCoordinator::new(options.coordinator),
            participants: HashMap::new(),
        })
    }

    /// Record a participant's display name for use in notifications.
    /// A participant without a recorded name notifies with an empty one.
    pub fn set_display_name(&mut self, participant: &str, display_name: impl Into<String>) {
        self.participants
            .entry(participant.to_string())
            .or_insert_with(ParticipantEntry::new)
            .display_name = Some(display_name.into());
    }

    /// Feed one connection-state sample for a participant.
    pub fn update(&mut self, participant: &str, state: ConnectionState) -> StatusUpdate {
        let tier = self.classifier.classify(state);

        let entry = self
            .participants
            .entry(participant.to_string())
            .or_insert_with(ParticipantEntry::new);
        entry.last_update = Instant::now();

        if entry.last_tier != Some(tier.tier) {
            debug!(
                "participant {participant} tier {:?} -> {}",
                entry.last_tier.map(TierId::as_str),
                tier.tier
            );
            publish(
                participant,
                StatusKind::TierChanged {
                    previous: entry.last_tier.map(|t| t.as_str().to_string()),
                    current: tier.tier.as_str().to_string(),
                },
            );
            entry.last_tier = Some(tier.tier);
        }

        let display_name = entry.display_name.clone().unwrap_or_default();
        let effect = self
            .coordinator
            .on_tier_changed(participant, &display_name, tier);
        publish_effect(participant, &effect);

        StatusUpdate { tier, effect }
    }

    /// Teardown path for a participant that left. The returned effect must
    /// still be applied downstream so no toast outlives its participant.
    pub fn remove_participant(&mut self, participant: &str) -> NotificationEffect {
        self.participants.remove(participant);
        let effect = self.coordinator.remove_participant(participant);
        publish_effect(participant, &effect);
        publish(participant, StatusKind::ParticipantRemoved);
        effect
    }

    /// Tear down every participant whose last sample is older than
    /// `max_age`, returning their dismiss effects for the caller to apply.
    pub fn prune_stale(&mut self, max_age: Duration) -> Vec<(String, NotificationEffect)> {
        let stale: Vec<String> = self
            .participants
            .iter()
            .filter(|(_, entry)| entry.last_update.elapsed() >= max_age)
            .map(|(key, _)| key.clone())
            .collect();

        stale
            .into_iter()
            .map(|key| {
                debug!("pruning stale participant {key}");
                let effect = self.remove_participant(&key);
                (key, effect)
            })
            .collect()
    }

    /// Last computed tier for a participant, if any sample has arrived.
    pub fn current_tier(&self, participant: &str) -> Option<TierId> {
        self.participants.get(participant)?.last_tier
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self {
            classifier: QualityClassifier::default(),
            coordinator: NotificationCoordinator::default(),
            participants: HashMap::new(),
        }
    }
}

// Bus publication is fire-and-forget; nobody listening is fine.
fn publish(participant: &str, kind: StatusKind) {
    let _ = global_sender().try_send(StatusEvent::now(
        CONNECTION_INDICATOR_SUBSYSTEM,
        Some(participant.to_string()),
        kind,
    ));
}

fn publish_effect(participant: &str, effect: &NotificationEffect) {
    match effect {
        NotificationEffect::Show { handle, .. } => publish(
            participant,
            StatusKind::NotificationShown {
                handle: handle.id(),
            },
        ),
        NotificationEffect::Dismiss { handle } => publish(
            participant,
            StatusKind::NotificationDismissed {
                handle: handle.id(),
            },
        ),
        NotificationEffect::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reports_tier_and_effect_together() {
        let mut monitor = ConnectionMonitor::default();
        monitor.set_display_name("a", "Alice");

        let healthy = monitor.update("a", ConnectionState::active(45));
        assert_eq!(healthy.tier.tier, TierId::High);
        assert!(healthy.effect.is_none());

        let degraded = monitor.update("a", ConnectionState::active(5));
        assert_eq!(degraded.tier.tier, TierId::Low);
        match degraded.effect {
            NotificationEffect::Show { display_name, .. } => assert_eq!(display_name, "Alice"),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn missing_display_name_substitutes_empty_string() {
        let mut monitor = ConnectionMonitor::default();
        match monitor.update("ghost", ConnectionState::Interrupted).effect {
            NotificationEffect::Show { display_name, .. } => assert_eq!(display_name, ""),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn current_tier_tracks_latest_sample() {
        let mut monitor = ConnectionMonitor::default();
        assert_eq!(monitor.current_tier("a"), None);
        monitor.update("a", ConnectionState::Inactive);
        assert_eq!(monitor.current_tier("a"), Some(TierId::Other));
        monitor.update("a", ConnectionState::active(80));
        assert_eq!(monitor.current_tier("a"), Some(TierId::High));
    }

    #[test]
    fn remove_participant_dismisses_and_forgets() {
        let mut monitor = ConnectionMonitor::default();
        monitor.update("a", ConnectionState::active(2));
        assert!(matches!(
            monitor.remove_participant("a"),
            NotificationEffect::Dismiss { .. }
        ));
        assert_eq!(monitor.current_tier("a"), None);
        assert_eq!(monitor.participant_count(), 0);
    }

    #[test]
    fn prune_stale_tears_down_silent_participants() {
        let mut monitor = ConnectionMonitor::default();
        monitor.update("quiet", ConnectionState::active(1));
        monitor.update("fine", ConnectionState::active(90));

        // With a zero cutoff everyone counts as stale.
        let pruned = monitor.prune_stale(Duration::ZERO);
        assert_eq!(pruned.len(), 2);
        assert_eq!(monitor.participant_count(), 0);

        let quiet_effect = pruned
            .iter()
            .find(|(key, _)| key == "quiet")
            .map(|(_, effect)| effect.clone())
            .unwrap();
        assert!(matches!(quiet_effect, NotificationEffect::Dismiss { .. }));

        let fine_effect = pruned
            .iter()
            .find(|(key, _)| key == "fine")
            .map(|(_, effect)| effect.clone())
            .unwrap();
        assert!(fine_effect.is_none());
    }

    #[test]
    fn fresh_participants_survive_pruning() {
        let mut monitor = ConnectionMonitor::default();
        monitor.update("a", ConnectionState::active(50));
        let pruned = monitor.prune_stale(Duration::from_secs(60));
        assert!(pruned.is_empty());
        assert_eq!(monitor.participant_count(), 1);
    }
}
