//! # opina-gateways
//!
//! Gateways to third-party services.

mod ip_echo;

pub use self::ip_echo::{IpEcho, NoOriginLookup};
