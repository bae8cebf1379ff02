use super::{FixContext, Resolve};
use crate::error::FixError;
use crate::resolution::Resolution;
use crate::synth::open_url;
use crate::syntax::SyntaxTree;

/// Rules whose only useful action is reading about them.
///
/// The diagnostic's content is ignored: the same link is offered wherever the finding sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    url: String,
}

impl Explanation {
    /// Offer `url` for every finding.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The explanation link.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Resolve for Explanation {
    fn resolve<T: SyntaxTree>(&self, _cx: &FixContext<'_, T>) -> Result<Resolution, FixError> {
        Ok(Resolution::single(open_url(&self.url), None))
    }
}
