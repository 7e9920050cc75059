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

use thiserror::Error;

/// Result type for quality-core operations
pub type Result<T> = std::result::Result<T, QualityError>;

/// Errors that can occur in the quality core.
///
/// Classification and notification coordination are total functions over
/// their runtime inputs (out-of-range values are clamped, never rejected),
/// so errors only arise from invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QualityError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
