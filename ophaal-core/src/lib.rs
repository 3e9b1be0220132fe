//! Core types and the generic client for the ophaal waste calendar crates.
//!
//! The supported Dutch backends (Twente Milieu, Meppel Afvalkalender, and the
//! generic WasteAPI) share one request pattern and differ only in host,
//! company code, body encoding, wire vocabulary, and aggregation behavior.
//! Those differences live in a [`ProviderProfile`]; everything else is the
//! shared [`WasteClient`].

/// Generic client resolving an address and fetching its pickup calendar.
pub mod client;
/// Error taxonomy shared by every provider profile.
pub mod error;
/// Domain models for addresses, waste types, and pickup calendars.
pub mod model;
/// Provider profile records and wire vocabularies.
pub mod profile;
/// Low-level request executor.
pub mod transport;

pub use client::*;
pub use error::*;
pub use model::*;
pub use profile::*;
pub use transport::*;
