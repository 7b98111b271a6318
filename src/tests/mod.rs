use std::sync::OnceLock;

use crate::ffdh::Group;

/// Small generated safe-prime group, shared across suites to keep the
/// generation cost down.
fn small_group() -> &'static Group {
    static G: OnceLock<Group> = OnceLock::new();
    G.get_or_init(|| {
        Group::generate(&mut rand::thread_rng(), 64).expect("Group::generate failed")
    })
}

pub mod integration;

pub mod property_tests;

pub mod security_tests;

pub mod unit;
