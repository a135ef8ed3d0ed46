//! Core - crate-wide plumbing shared by every system
//!
//! - error:    error enums for the group protocol, config and feedback paths
//! - protocol: debug/release split for group-protocol violations
//! - logging:  `log` sink that writes to the browser console
//! - random:   xorshift32 used for tap-to-spawn randomness

pub mod error;
pub mod logging;
pub mod protocol;
pub mod random;
