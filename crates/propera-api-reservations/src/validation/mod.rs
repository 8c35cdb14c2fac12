//! Input validation for the Reservation API.

pub mod upload;

pub use upload::{sanitize_filename, validate_upload, UploadPolicy};
