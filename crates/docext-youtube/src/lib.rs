//! YouTube embed directive.
//!
//! Turns `::youtube[<video-id>]{width=... height=... aspect=W:H}` into an
//! embedded player. Sizing works in one of two modes:
//!
//! - **Responsive**: a percentage width with no height. The player keeps its
//!   aspect ratio through a padding box that scales with the page.
//! - **Fixed**: explicit pixel dimensions. A missing side is derived from the
//!   aspect ratio (16:9 unless given); with no sizes at all the player is
//!   560px wide.
//!
//! Both modes reserve [`CONTROL_HEIGHT`] extra pixels for the player controls.
//!
//! The sizing core is pure: [`resolve_embed`] maps an [`EmbedRequest`] to an
//! [`EmbedFragment`] and never fails, because option strings are validated
//! when the request is built.
//!
//! ```
//! use docext_youtube::embed;
//!
//! let fragment = embed("dQw4w9WgXcQ", Some("320px"), None, Some("4:3")).unwrap();
//! assert_eq!(
//!     fragment.to_html(),
//!     r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" style="border: 0; height: 270px; width: 320px" allowfullscreen></iframe>"#
//! );
//! ```

mod aspect;
mod dimension;
mod directive;
mod error;
mod fragment;
mod layout;

pub use aspect::AspectRatio;
pub use dimension::{Dimension, Unit};
pub use directive::YoutubeDirective;
pub use error::EmbedError;
pub use fragment::{EmbedFragment, Style};
pub use layout::{EmbedRequest, resolve_embed};

/// Extra height reserved for the player control bar, in pixels.
pub const CONTROL_HEIGHT: u32 = 30;

/// Width used when neither width nor height is given, in pixels.
pub const DEFAULT_WIDTH: u32 = 560;

/// Embed URL prefix; the video id is appended verbatim.
pub const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";

/// Validate raw option strings and resolve them into a fragment.
///
/// # Errors
///
/// Returns [`EmbedError`] when the id is blank or an option string is malformed.
pub fn embed(
    video_id: &str,
    width: Option<&str>,
    height: Option<&str>,
    aspect: Option<&str>,
) -> Result<EmbedFragment, EmbedError> {
    let request = EmbedRequest::from_options(video_id, width, height, aspect)?;
    Ok(resolve_embed(&request))
}
