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

//! Feed a simulated quality trace through the monitor and print the tier,
//! the notification effects and the web view model for each sample.
//!
//! Run with: `RUST_LOG=debug cargo run --example basic_usage`

use conference_quality::{
    ConnectionMonitor, ConnectionState, IndicatorRenderer, NotificationEffect,
    WebIndicatorRenderer, DEFAULT_STALE_AFTER,
};

fn main() {
    env_logger::init();

    let mut monitor = ConnectionMonitor::default();
    let renderer = WebIndicatorRenderer::default();
    monitor.set_display_name("alice", "Alice");

    let trace = [
        ConnectionState::active_unknown(),
        ConnectionState::active(82),
        ConnectionState::active(24),
        ConnectionState::active(6),
        ConnectionState::active(6),
        ConnectionState::Interrupted,
        ConnectionState::active(45),
    ];

    for state in trace {
        let update = monitor.update("alice", state);
        let view = renderer.render(update.tier);
        println!(
            "{state:?} -> {} ({}, bar {}%)",
            update.tier.tier, view.indicator_class, view.full_bar_width_percent
        );
        match update.effect {
            NotificationEffect::Show {
                handle,
                display_name,
                ..
            } => println!("  show toast #{} for {display_name}", handle.id()),
            NotificationEffect::Dismiss { handle } => {
                println!("  dismiss toast #{}", handle.id())
            }
            NotificationEffect::None => {}
        }
    }

    // A participant that stops reporting gets torn down by pruning.
    monitor.update("bob", ConnectionState::active(4));
    std::thread::sleep(DEFAULT_STALE_AFTER);
    for (key, effect) in monitor.prune_stale(DEFAULT_STALE_AFTER) {
        println!("pruned {key} -> {effect:?}");
    }

    let effect = monitor.remove_participant("alice");
    println!("alice left -> {effect:?}");
}
