use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::resolution::{Miss, Resolution};
use crate::synth::insert_text;
use crate::syntax::{NodeKind, SyntaxTree};

/// A comment that should end in a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentPeriod;

impl Resolve for CommentPeriod {
    fn resolve<T: SyntaxTree>(&self, cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        let Some(comment) = cx.anchor(|kind| kind == NodeKind::Comment) else {
            return Ok(Resolution::not_found(Miss::NoAnchor));
        };
        let range = cx.tree.range(comment);
        let highlight = Some(range);

        let Some(end) = content_end(cx.tree.text(comment)) else {
            return Ok(Resolution::no_fix(highlight));
        };
        let edit = insert_text(range.start + end, ".", "Add period to comment end", highlight);
        Ok(Resolution::single(edit, highlight))
    }
}

/// Offset (within the comment) right after its last content character, or `None` when the
/// comment is empty or already ends a sentence.
fn content_end(text: &str) -> Option<usize> {
    let (body, opener) = match text.strip_suffix("*/") {
        Some(body) if text.starts_with("/*") => (body, "/*"),
        _ => (text, "//"),
    };
    let content = body.trim_end();
    if content.len() <= opener.len() || content.ends_with(['.', '!', '?']) {
        return None;
    }
    Some(content.len())
}
