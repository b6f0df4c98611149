//! `::youtube` leaf directive.

use docext_directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, LeafDirective};

use crate::{EmbedRequest, resolve_embed};

/// Handler for `::youtube[<video-id>]{width=... height=... aspect=W:H}`.
///
/// Invalid options are reported through [`warnings`](LeafDirective::warnings)
/// and the directive is left in the page as written.
///
/// ```
/// use docext_directive::DirectiveProcessor;
/// use docext_youtube::YoutubeDirective;
///
/// let mut processor = DirectiveProcessor::new().with_leaf(YoutubeDirective::new());
/// let html = processor.process("::youtube[dQw4w9WgXcQ]{width=100%}");
/// assert!(html.starts_with(r#"<div style="padding-bottom: 56%; padding-top: 30px;"#));
/// assert!(processor.warnings().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct YoutubeDirective {
    warnings: Vec<String>,
}

impl YoutubeDirective {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeafDirective for YoutubeDirective {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn process(&mut self, args: DirectiveArgs, ctx: &DirectiveContext) -> DirectiveOutput {
        let request = EmbedRequest::from_options(
            &args.content,
            args.get("width"),
            args.get("height"),
            args.get("aspect"),
        );

        match request {
            Ok(request) => {
                let fragment = resolve_embed(&request);
                tracing::debug!(
                    video_id = %request.video_id,
                    responsive = fragment.is_responsive(),
                    style = %fragment.frame_style(),
                    "Resolved youtube embed"
                );
                DirectiveOutput::html(fragment.to_html())
            }
            Err(e) => {
                let message = format!("{ctx}: youtube: {e}");
                tracing::warn!("{message}");
                self.warnings.push(message);
                DirectiveOutput::Skip
            }
        }
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docext_directive::{DirectiveProcessor, DirectiveProcessorConfig};
    use pretty_assertions::assert_eq;

    fn process(input: &str) -> (String, Vec<String>) {
        let config = DirectiveProcessorConfig::new().with_source_path("docs/tutorials/react.md");
        let mut processor =
            DirectiveProcessor::with_config(config).with_leaf(YoutubeDirective::new());
        let output = processor.process(input);
        (output, processor.warnings())
    }

    #[test]
    fn test_fixed_embed() {
        let (output, warnings) = process("::youtube[dQw4w9WgXcQ]{width=320px aspect=4:3}\n");

        assert_eq!(
            output,
            "<iframe src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\" style=\"border: 0; height: 270px; width: 320px\" allowfullscreen></iframe>\n"
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_responsive_embed() {
        let (output, _) = process("::youtube[dQw4w9WgXcQ]{width=\"100%\"}");

        assert_eq!(
            output,
            "<div style=\"padding-bottom: 56%; padding-top: 30px; position: relative; width: 100%\"><iframe src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\" style=\"border: 0; height: 100%; left: 0; position: absolute; top: 0; width: 100%\" allowfullscreen></iframe></div>"
        );
    }

    #[test]
    fn test_invalid_width_warns_and_passes_through() {
        let input = "Intro\n\n::youtube[abc]{width=10em}";
        let (output, warnings) = process(input);

        assert_eq!(output, input);
        assert_eq!(
            warnings,
            [
                r#"docs/tutorials/react.md:3: youtube: invalid size "10em" for option `width` (expected e.g. 560, 560px or 100%)"#
            ]
        );
    }

    #[test]
    fn test_invalid_aspect_warns() {
        let (_, warnings) = process("::youtube[abc]{aspect=0:9}");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(r#"invalid aspect ratio "0:9""#));
    }

    #[test]
    fn test_missing_id_warns() {
        let (output, warnings) = process("::youtube{width=560}");
        assert_eq!(output, "::youtube{width=560}");
        assert!(warnings[0].ends_with("youtube: missing video id (expected ::youtube[<video-id>])"));
    }

    #[test]
    fn test_error_does_not_stop_later_embeds() {
        let (output, warnings) = process("::youtube[a]{height=x}\n::youtube[b]");

        assert_eq!(warnings.len(), 1);
        assert!(output.starts_with("::youtube[a]{height=x}\n<iframe"));
        assert!(output.contains("embed/b"));
    }
}
