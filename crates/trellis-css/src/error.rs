//! Error types for style resolution and stylesheet generation.

use thiserror::Error;

/// Errors that can occur while resolving styles or generating CSS.
#[derive(Error, Debug)]
pub enum CssError {
    /// A style or theme configuration carried a value that cannot be
    /// represented in valid CSS. This is a caller bug and fails the
    /// build rather than degrading silently.
    #[error("cannot serialize {what}: {detail}")]
    Serialization { what: String, detail: String },

    /// A referenced resource (usually a font source) could not be
    /// resolved. Recorded as a warning; rendering continues with the
    /// nearest safe fallback.
    #[error("missing resource: {resource}")]
    MissingResource { resource: String },

    /// Two different variant bundles mapped to the same base class.
    /// Content addressing makes this impossible unless the engine itself
    /// is broken, so it is a fatal internal-consistency error.
    #[error("base class {class} registered twice with different content")]
    InternalConsistency { class: String },
}
