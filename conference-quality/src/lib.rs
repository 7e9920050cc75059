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

//! Connection-quality display core for conferencing UIs.
//!
//! The media/session layer produces per-participant [`ConnectionState`]
//! samples; this crate classifies them into display tiers, coordinates the
//! per-participant "connection is low" notifications, and renders pure view
//! models the host UI can turn into markup or widgets. Quality measurement,
//! media transport and actual rendering live elsewhere.

pub mod classifier;
pub mod connection_state;
pub mod coordinator;
pub mod error;
pub mod filmstrip;
pub mod monitor;
pub mod render;

pub use classifier::{
    classify, ClassifierConfig, QualityClassifier, QualityTier, TierId,
    INDICATOR_DISPLAY_THRESHOLD,
};
pub use connection_state::ConnectionState;
pub use coordinator::{
    CoordinatorOptions, NotificationCoordinator, NotificationEffect, NotificationHandle,
};
pub use error::{QualityError, Result};
pub use filmstrip::{AudioIndicatorView, VolumeMeterView};
pub use monitor::{ConnectionMonitor, MonitorOptions, StatusUpdate, DEFAULT_STALE_AFTER};
pub use render::{
    ConnectionIndicatorView, IndicatorIcon, IndicatorRenderer, NativeIndicatorRenderer,
    NativeIndicatorView, WebIndicatorRenderer,
};
