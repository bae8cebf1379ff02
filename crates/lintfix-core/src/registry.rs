//! Rule → strategy registry.

use crate::config::FixConfig;
use crate::diagnostic::Diagnostic;
use crate::error::FixError;
use crate::line_index::LineDocument;
use crate::resolution::Resolution;
use crate::strategy::{
    BlankLines, CommentPeriod, DuplicateLines, Explanation, FixContext, FunctionSuppression,
    IneffectualAssignment, MagicNumber, MissingCases, Naming, NewlineBeforeReturn, ParameterType,
    PrintfName, RepeatedString, Resolve, StatementRange, Strategy, StructLayout, TestPackage,
    Unresolved, UnusedDeclaration, UnusedParameter,
};
use crate::syntax::SyntaxTree;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

const NOCTX_EXPLANATION_URL: &str = "https://github.com/sonatard/noctx/blob/master/README.md";

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry::new(&FixConfig::default()));

/// Immutable mapping from rule identifiers to strategies.
///
/// Rules sharing a strategy share one `Arc`, so the registry stays small and its entries can be
/// compared by identity. Unknown and excluded rules resolve to [`Unresolved`].
#[derive(Debug, Clone)]
pub struct Registry {
    strategies: HashMap<String, Arc<Strategy>>,
    excluded: HashSet<String>,
    fallback: Arc<Strategy>,
}

impl Registry {
    /// Build a registry from `config`.
    pub fn new(config: &FixConfig) -> Self {
        let mut strategies = HashMap::new();
        let mut register = |rules: &[&str], strategy: Strategy| {
            let strategy = Arc::new(strategy);
            for rule in rules {
                strategies.insert(rule.to_string(), Arc::clone(&strategy));
            }
        };

        register(
            &["ineffassign"],
            Strategy::IneffectualAssignment(IneffectualAssignment::new(&config.placeholder)),
        );
        register(&["interfacer"], Strategy::ParameterType(ParameterType));
        register(&["whitespace"], Strategy::BlankLines(BlankLines));
        register(&["goconst"], Strategy::RepeatedString(RepeatedString));
        register(&["godot"], Strategy::CommentPeriod(CommentPeriod));
        register(&["testpackage"], Strategy::TestPackage(TestPackage));
        register(&["goprintffuncname"], Strategy::PrintfName(PrintfName));
        register(&["gomnd"], Strategy::MagicNumber(MagicNumber));
        register(&["dupl"], Strategy::DuplicateLines(DuplicateLines));
        register(&["unparam"], Strategy::UnusedParameter(UnusedParameter));
        register(&["nlreturn"], Strategy::NewlineBeforeReturn(NewlineBeforeReturn));
        register(
            &["structcheck", "varcheck", "deadcode", "unused"],
            Strategy::UnusedDeclaration(UnusedDeclaration),
        );
        register(&["golint", "stylecheck"], Strategy::Naming(Naming));
        register(&["maligned"], Strategy::StructLayout(StructLayout));
        register(
            &["gocritic", "staticcheck", "gosimple"],
            Strategy::StatementRange(StatementRange),
        );
        register(&["exhaustive"], Strategy::MissingCases(MissingCases));

        for rule in ["scopelint", "goerr113", "gofumpt", "exportloopref"] {
            register(
                &[rule],
                Strategy::Explanation(Explanation::new(config.explanation_url(rule))),
            );
        }
        register(
            &["noctx"],
            Strategy::Explanation(Explanation::new(NOCTX_EXPLANATION_URL)),
        );
        for linter in &config.function_linters {
            register(
                &[linter.as_str()],
                Strategy::FunctionSuppression(FunctionSuppression::new(linter)),
            );
        }

        Self {
            strategies,
            excluded: config.excluded_rules.iter().cloned().collect(),
            fallback: Arc::new(Strategy::Unresolved(Unresolved)),
        }
    }

    /// The registry built from [`FixConfig::default`], created on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Strategy that handles `rule`.
    pub fn resolve(&self, rule: &str) -> &Strategy {
        self.entry(rule).unwrap_or(&self.fallback)
    }

    /// Registered strategy for `rule`, `None` when unknown or excluded.
    pub fn entry(&self, rule: &str) -> Option<&Arc<Strategy>> {
        if self.is_excluded(rule) {
            tracing::debug!(rule, "rule excluded from dispatch");
            return None;
        }
        self.strategies.get(rule)
    }

    /// Whether `rule` is kept out of dispatch by configuration.
    pub fn is_excluded(&self, rule: &str) -> bool {
        self.excluded.contains(rule)
    }

    /// Whether `rule` falls back to [`Unresolved`].
    pub fn is_unknown(&self, rule: &str) -> bool {
        !self.strategies.contains_key(rule) || self.is_excluded(rule)
    }

    /// Registered rule identifiers (excluded ones included), sorted.
    pub fn rules(&self) -> Vec<&str> {
        let mut rules = self.strategies.keys().map(String::as_str).collect::<Vec<_>>();
        rules.sort_unstable();
        rules
    }

    /// Resolve `diagnostic` against the live tree and document.
    ///
    /// `effective_line` is the 0-based live line the finding refers to now; all other reported
    /// lines move by the same amount.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(rule = %diagnostic.rule, line = effective_line)
    )]
    pub fn fix<T: SyntaxTree>(
        &self,
        tree: &T,
        document: &dyn LineDocument,
        diagnostic: &Diagnostic,
        effective_line: usize,
    ) -> Result<Resolution, FixError> {
        let strategy = self.resolve(&diagnostic.rule);
        let cx = FixContext::new(tree, document, diagnostic, effective_line);
        let resolution = strategy.resolve(&cx)?;
        if let Some(reason) = resolution.miss() {
            tracing::debug!(strategy = strategy.name(), ?reason, "diagnostic not resolved");
        }
        Ok(resolution)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&FixConfig::default())
    }
}
