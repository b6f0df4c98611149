//! Embed error types.

/// Error raised while validating `youtube` directive options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    /// Width or height does not match `<digits>(px|%)?`.
    #[error("invalid size {value:?} for option `{option}` (expected e.g. 560, 560px or 100%)")]
    InvalidDimension {
        /// Option name (`width` or `height`).
        option: &'static str,
        /// Offending value as written.
        value: String,
    },
    /// Aspect does not match `W:H` or has a zero component.
    #[error("invalid aspect ratio {0:?} (expected W:H with positive integers, e.g. 16:9)")]
    InvalidAspectRatio(String),
    /// The directive has no video id.
    #[error("missing video id (expected ::youtube[<video-id>])")]
    MissingVideoId,
}
