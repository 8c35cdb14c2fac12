//! Upload policy validation for identity documents.
//!
//! Pure checks against a candidate file's declared MIME type and byte size.
//! No I/O happens here; the document-storage adapter is only reached after
//! the policy passes.

use crate::error::ApiReservationsError;

/// Maximum identity-document size in bytes (10 MiB).
pub const IDENTITY_DOCUMENT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted for identity documents.
pub const IDENTITY_DOCUMENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];

/// Maximum allowed filename length (bytes).
const MAX_FILENAME_LENGTH: usize = 255;

/// An upload policy: which declared types are allowed and how large the
/// file may be.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    /// Allowed declared MIME types.
    pub allowed_types: &'static [&'static str],
    /// Maximum byte size, inclusive.
    pub max_bytes: usize,
}

impl UploadPolicy {
    /// The policy applied to identity-document uploads.
    #[must_use]
    pub fn identity_document() -> Self {
        Self {
            allowed_types: IDENTITY_DOCUMENT_TYPES,
            max_bytes: IDENTITY_DOCUMENT_MAX_BYTES,
        }
    }
}

/// Check a candidate file against an upload policy.
///
/// Fails with `InvalidFileType` when the declared MIME type is not in the
/// allowed set, and with `FileTooLarge` when the size exceeds the cap.
pub fn validate_upload(
    content_type: &str,
    size: usize,
    policy: &UploadPolicy,
) -> Result<(), ApiReservationsError> {
    let declared = content_type.trim().to_ascii_lowercase();
    if !policy.allowed_types.contains(&declared.as_str()) {
        return Err(ApiReservationsError::InvalidFileType(format!(
            "'{content_type}' is not allowed; accepted types: {}",
            policy.allowed_types.join(", ")
        )));
    }

    if size > policy.max_bytes {
        return Err(ApiReservationsError::FileTooLarge(format!(
            "file size {size} bytes exceeds maximum {} bytes",
            policy.max_bytes
        )));
    }

    Ok(())
}

/// SECURITY: Sanitize an uploaded filename to prevent path traversal and
/// other attacks.
///
/// Removes directory components, filters to safe characters (alphanumeric,
/// dash, underscore, period), strips leading periods and limits the length
/// while preserving the extension.
#[must_use]
pub fn sanitize_filename(raw_filename: &str) -> String {
    let filename = raw_filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw_filename);

    let sanitized: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || *c == '.')
        .collect();

    let sanitized = sanitized.trim_start_matches('.');
    let sanitized: String = sanitized.chars().fold(String::new(), |mut acc, c| {
        if c == '.' && acc.ends_with('.') {
            // Skip consecutive periods
        } else {
            acc.push(c);
        }
        acc
    });

    let result = if sanitized.len() > MAX_FILENAME_LENGTH {
        if let Some(ext_pos) = sanitized.rfind('.') {
            let ext = &sanitized[ext_pos..];
            if ext.len() < MAX_FILENAME_LENGTH {
                let name_len = MAX_FILENAME_LENGTH - ext.len();
                format!("{}{}", &sanitized[..name_len], ext)
            } else {
                sanitized[..MAX_FILENAME_LENGTH].to_string()
            }
        } else {
            sanitized[..MAX_FILENAME_LENGTH].to_string()
        }
    } else {
        sanitized
    };

    if result.is_empty() {
        "upload".to_string()
    } else {
        result
    }
}
