//! Propera Core Library
//!
//! Shared types for the Propera reservation platform.
//!
//! # Modules
//!
//! - [`tracking`] - Human-facing tracking numbers for reservations
//!
//! # Example
//!
//! ```
//! use propera_core::TrackingNumber;
//!
//! let tracking = TrackingNumber::generate();
//! assert!(tracking.as_str().starts_with("TRK-"));
//! ```

pub mod tracking;

pub use tracking::TrackingNumber;
