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

use serde::{Deserialize, Serialize};

/// The connectivity of a single participant as reported by the media layer,
/// one sample per update tick.
///
/// `Active` carries the connection-quality percentage once the quality
/// monitor has produced a sample; until then the percentage is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConnectionState {
    /// Media is flowing; quality percentage in 0..=100 once known.
    Active { percent: Option<u8> },
    /// Media is deliberately not flowing (the participant went "ninja").
    Inactive,
    /// The transport is believed lost.
    Interrupted,
}

impl ConnectionState {
    /// Active state with a known quality percentage.
    ///
    /// Out-of-range inputs are clamped to [0, 100]; this is a display
    /// classification input and must always be usable.
    pub fn active(percent: i32) -> Self {
        ConnectionState::Active {
            percent: Some(percent.clamp(0, 100) as u8),
        }
    }

    /// Active state before the first quality sample has arrived.
    pub fn active_unknown() -> Self {
        ConnectionState::Active { percent: None }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ConnectionState::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_clamps_out_of_range_percentages() {
        assert_eq!(
            ConnectionState::active(150),
            ConnectionState::Active { percent: Some(100) }
        );
        assert_eq!(
            ConnectionState::active(-20),
            ConnectionState::Active { percent: Some(0) }
        );
        assert_eq!(
            ConnectionState::active(55),
            ConnectionState::Active { percent: Some(55) }
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(ConnectionState::Interrupted).unwrap();
        assert_eq!(json["status"], "interrupted");

        let json = serde_json::to_value(ConnectionState::active(42)).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["percent"], 42);
    }
}
