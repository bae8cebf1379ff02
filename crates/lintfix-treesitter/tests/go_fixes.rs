use lintfix_core::{Diagnostic, FixConfig, FixError, Miss, NodeKind, Registry, Resolution};
use lintfix_treesitter::{GoSource, GoSyntaxError, UpdateMode, classify};
use pretty_assertions::assert_eq;

/// Resolve a diagnostic reported against the current text (no drift).
fn resolve(source: &GoSource, diagnostic: &Diagnostic) -> Resolution {
    source
        .fix(Registry::builtin(), diagnostic, diagnostic.position.line - 1)
        .unwrap()
}

/// Resolve, apply the first edit and return the new text.
fn fixed(text: &str, diagnostic: &Diagnostic) -> String {
    let mut source = GoSource::parse(text).unwrap();
    let resolution = resolve(&source, diagnostic);
    let Some(edit) = resolution.edits().first() else {
        panic!("no edit for {diagnostic:?}: {resolution:?}");
    };
    source.apply(edit).unwrap();
    assert!(!source.has_errors(), "{}", source.text());
    source.text().to_string()
}

fn highlighted<'a>(text: &'a str, resolution: &Resolution) -> &'a str {
    let range = resolution.highlight().unwrap();
    &text[range.start..range.end]
}

#[test]
fn test_whitespace_removes_leading_blank_line() {
    let text = "package p\n\nfunc f() {\n\n\tx := 1\n\t_ = x\n}\n";
    let diagnostic = Diagnostic::new("whitespace", "unnecessary leading newline", 4, 1)
        .with_line_range(4, 4);

    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nfunc f() {\n\tx := 1\n\t_ = x\n}\n"
    );
}

#[test]
fn test_whitespace_removes_several_trailing_lines() {
    let text = "package p\n\nfunc f() {\n\tx := 1\n\t_ = x\n\n\n}\n";
    let diagnostic = Diagnostic::new("whitespace", "unnecessary trailing newline", 6, 1)
        .with_line_range(6, 7);

    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nfunc f() {\n\tx := 1\n\t_ = x\n}\n"
    );
}

#[test]
fn test_whitespace_follows_line_drift() {
    // Two lines were added above the finding since the analyzer ran.
    let text = "// Package p.\n//\npackage p\n\nfunc f() {\n\n\tx := 1\n\t_ = x\n}\n";
    let diagnostic = Diagnostic::new("whitespace", "unnecessary leading newline", 4, 1)
        .with_line_range(4, 4);

    let mut source = GoSource::parse(text).unwrap();
    let resolution = source.fix(Registry::builtin(), &diagnostic, 5).unwrap();
    source.apply(&resolution.edits()[0]).unwrap();

    assert_eq!(
        source.text(),
        "// Package p.\n//\npackage p\n\nfunc f() {\n\tx := 1\n\t_ = x\n}\n"
    );
}

#[test]
fn test_whitespace_never_touches_string_contents() {
    let text = "package p\n\nvar s = `a\n\nb`\n";
    let diagnostic = Diagnostic::new("whitespace", "unnecessary leading newline", 4, 1)
        .with_line_range(4, 4);
    let source = GoSource::parse(text).unwrap();

    let resolution = resolve(&source, &diagnostic);
    assert!(resolution.edits().is_empty());
    assert!(!resolution.is_not_found());
}

#[test]
fn test_whitespace_requires_line_range() {
    let source = GoSource::parse("package p\n\nfunc f() {\n\n}\n").unwrap();
    let diagnostic = Diagnostic::new("whitespace", "unnecessary leading newline", 4, 1);

    let err = source.fix(Registry::builtin(), &diagnostic, 3).unwrap_err();
    assert!(matches!(err, FixError::MissingLineRange { .. }));
}

const ASSIGNMENTS: &str = "package p\n\nfunc f() int {\n\tx := 1\n\tx = 2\n\tx = 3\n\treturn x\n}\n";

#[test]
fn test_ineffassign_renames_target() {
    let diagnostic = Diagnostic::new("ineffassign", "ineffectual assignment to x", 5, 2);
    assert_eq!(
        fixed(ASSIGNMENTS, &diagnostic),
        "package p\n\nfunc f() int {\n\tx := 1\n\t_ = 2\n\tx = 3\n\treturn x\n}\n"
    );
}

#[test]
fn test_ineffassign_name_mismatch_and_bindings() {
    let source = GoSource::parse(ASSIGNMENTS).unwrap();

    let mismatch = Diagnostic::new("ineffassign", "ineffectual assignment to y", 5, 2);
    assert_eq!(
        resolve(&source, &mismatch),
        Resolution::not_found(Miss::NameMismatch)
    );

    // `x := 1` declares x; blanking it would break the later uses.
    let binding = Diagnostic::new("ineffassign", "ineffectual assignment to x", 4, 2);
    assert_eq!(
        resolve(&source, &binding),
        Resolution::not_found(Miss::NoAnchor)
    );
}

#[test]
fn test_out_of_bounds_positions_are_not_found() {
    let source = GoSource::parse(ASSIGNMENTS).unwrap();
    let past_end = Diagnostic::new("ineffassign", "ineffectual assignment to x", 50, 2);
    assert_eq!(
        resolve(&source, &past_end),
        Resolution::not_found(Miss::OutOfBounds)
    );

    let past_column = Diagnostic::new("ineffassign", "ineffectual assignment to x", 5, 40);
    assert_eq!(
        resolve(&source, &past_column),
        Resolution::not_found(Miss::OutOfBounds)
    );
}

#[test]
fn test_interfacer_replaces_parameter_type() {
    let text = "package p\n\nimport \"os\"\n\nfunc closeIt(f *os.File) error {\n\treturn f.Close()\n}\n";
    let diagnostic = Diagnostic::new("interfacer", "`f` can be `io.Closer`", 5, 14);

    let source = GoSource::parse(text).unwrap();
    assert_eq!(highlighted(text, &resolve(&source, &diagnostic)), "*os.File");
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nimport \"os\"\n\nfunc closeIt(f io.Closer) error {\n\treturn f.Close()\n}\n"
    );
}

#[test]
fn test_goconst_introduces_constant_after_imports() {
    let text = "package p\n\nimport \"fmt\"\n\nfunc f() {\n\tfmt.Println(\"hello world\")\n\tfmt.Println(\"hello world\")\n}\n";
    let diagnostic = Diagnostic::new(
        "goconst",
        "string `hello world` has 2 occurrences, make it a constant",
        6,
        14,
    );

    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nimport \"fmt\"\n\nconst helloWorld = \"hello world\"\n\nfunc f() {\n\tfmt.Println(helloWorld)\n\tfmt.Println(helloWorld)\n}\n"
    );
}

#[test]
fn test_goconst_avoids_keyword_names() {
    let text = "package p\n\nfunc f(m map[string]int) int {\n\treturn m[\"default\"] + m[\"default\"]\n}\n";
    let diagnostic = Diagnostic::new(
        "goconst",
        "string `default` has 2 occurrences, make it a constant",
        4,
        11,
    );

    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nconst defaultStr = \"default\"\n\nfunc f(m map[string]int) int {\n\treturn m[defaultStr] + m[defaultStr]\n}\n"
    );
}

#[test]
fn test_unicode_line_separators_do_not_split_lines() {
    // U+2028 inside a comment is not a line break for Go or the analyzer.
    let text = "package p\n\n// a\u{2028}b\nfunc f() int {\n\tx := 1\n\tx = 2\n\treturn x\n}\n";
    let diagnostic = Diagnostic::new("ineffassign", "ineffectual assignment to x", 6, 2);

    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\n// a\u{2028}b\nfunc f() int {\n\tx := 1\n\t_ = 2\n\treturn x\n}\n"
    );
}

#[test]
fn test_godot_appends_period() {
    let line = "package p\n\n// Sum adds numbers\nfunc Sum(a, b int) int {\n\treturn a + b\n}\n";
    let diagnostic = Diagnostic::new("godot", "Comment should end in a period", 3, 1);
    assert_eq!(
        fixed(line, &diagnostic),
        "package p\n\n// Sum adds numbers.\nfunc Sum(a, b int) int {\n\treturn a + b\n}\n"
    );

    let block = "package p\n\n/* Sum adds numbers */\nfunc Sum(a, b int) int {\n\treturn a + b\n}\n";
    assert_eq!(
        fixed(block, &diagnostic),
        "package p\n\n/* Sum adds numbers. */\nfunc Sum(a, b int) int {\n\treturn a + b\n}\n"
    );
}

#[test]
fn test_testpackage_renames_package() {
    let text = "package calc\n\nimport \"testing\"\n\nfunc TestSum(t *testing.T) {}\n";
    let diagnostic = Diagnostic::new(
        "testpackage",
        "package should be `calc_test` instead of `calc`",
        1,
        1,
    );
    assert_eq!(
        fixed(text, &diagnostic),
        "package calc_test\n\nimport \"testing\"\n\nfunc TestSum(t *testing.T) {}\n"
    );

    let already = GoSource::parse("package calc_test\n").unwrap();
    let resolution = resolve(&already, &diagnostic);
    assert!(resolution.edits().is_empty());
    assert_eq!(highlighted(already.text(), &resolution), "calc_test");
}

#[test]
fn test_goprintffuncname_appends_f() {
    let text = "package p\n\nimport \"fmt\"\n\nfunc Log(format string, args ...interface{}) {\n\tfmt.Printf(format, args...)\n}\n";
    let diagnostic = Diagnostic::new(
        "goprintffuncname",
        "printf-like formatting function 'Log' should be named 'Logf'",
        5,
        1,
    );
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nimport \"fmt\"\n\nfunc Logf(format string, args ...interface{}) {\n\tfmt.Printf(format, args...)\n}\n"
    );
}

#[test]
fn test_unused_deletes_declarations() {
    let var = Diagnostic::new("varcheck", "`unused` is unused", 3, 5);
    assert_eq!(
        fixed("package p\n\nvar unused = 1\n\nfunc f() {}\n", &var),
        "package p\n\n\nfunc f() {}\n"
    );

    let grouped = Diagnostic::new("deadcode", "`b` is unused", 5, 2);
    assert_eq!(
        fixed("package p\n\nconst (\n\ta = 1\n\tb = 2\n)\n", &grouped),
        "package p\n\nconst (\n\ta = 1\n)\n"
    );

    let function = Diagnostic::new("unused", "func `helper` is unused", 3, 6);
    assert_eq!(
        fixed("package p\n\nfunc helper() {}\n\nfunc main() {}\n", &function),
        "package p\n\n\nfunc main() {}\n"
    );

    let field = Diagnostic::new("structcheck", "`unused` is unused", 5, 2);
    assert_eq!(
        fixed(
            "package p\n\ntype T struct {\n\tused   int\n\tunused int\n}\n",
            &field
        ),
        "package p\n\ntype T struct {\n\tused   int\n}\n"
    );
}

#[test]
fn test_unused_multi_name_spec_is_highlight_only() {
    let text = "package p\n\nvar a, b = 1, 2\n";
    let source = GoSource::parse(text).unwrap();
    let resolution = resolve(&source, &Diagnostic::new("unused", "var `b` is unused", 3, 8));

    assert!(resolution.edits().is_empty());
    assert_eq!(highlighted(text, &resolution), "b");
}

#[test]
fn test_golint_renames_declaration() {
    let text = "package p\n\nfunc getUrl() string { return \"\" }\n";
    let diagnostic = Diagnostic::new("golint", "func getUrl should be getURL", 3, 6);
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nfunc getURL() string { return \"\" }\n"
    );

    let source = GoSource::parse(text).unwrap();
    let malformed = Diagnostic::new(
        "stylecheck",
        "exported function getUrl should have comment or be unexported",
        3,
        6,
    );
    assert_eq!(
        resolve(&source, &malformed),
        Resolution::not_found(Miss::MalformedMessage)
    );
}

const SWITCH: &str = "package p\n\ntype Color int\n\nconst (\n\tRed Color = iota\n\tBlue\n\tGreen\n)\n\nfunc name(c Color) string {\n\tswitch c {\n\tcase Red:\n\t\treturn \"red\"\n\t}\n\treturn \"\"\n}\n";

#[test]
fn test_exhaustive_is_excluded_by_default() {
    let source = GoSource::parse(SWITCH).unwrap();
    let diagnostic = Diagnostic::new(
        "exhaustive",
        "missing cases in switch of type Color: Blue, Green",
        12,
        2,
    );
    assert_eq!(
        resolve(&source, &diagnostic),
        Resolution::not_found(Miss::UnknownRule)
    );
}

#[test]
fn test_missing_cases_inserted_once() {
    let registry = Registry::new(&FixConfig::default().without_excluded_rule("exhaustive"));
    let diagnostic = Diagnostic::new(
        "exhaustive",
        "missing cases in switch of type Color: Blue, Green",
        12,
        2,
    );

    let mut source = GoSource::parse(SWITCH).unwrap();
    let resolution = source.fix(&registry, &diagnostic, 11).unwrap();
    assert_eq!(highlighted(SWITCH, &resolution), "c");
    source.apply(&resolution.edits()[0]).unwrap();

    assert_eq!(
        source.text(),
        "package p\n\ntype Color int\n\nconst (\n\tRed Color = iota\n\tBlue\n\tGreen\n)\n\nfunc name(c Color) string {\n\tswitch c {\n\tcase Red:\n\t\treturn \"red\"\n\tcase Blue, Green:\n\t}\n\treturn \"\"\n}\n"
    );
    assert_eq!(source.last_update_mode(), UpdateMode::Incremental);

    // Every label is present now.
    let again = source.fix(&registry, &diagnostic, 11).unwrap();
    assert!(matches!(again, Resolution::NoFix { .. }), "{again:?}");
}

#[test]
fn test_missing_cases_skips_present_labels_and_default() {
    let registry = Registry::new(&FixConfig::default().without_excluded_rule("exhaustive"));
    let diagnostic = Diagnostic::new(
        "exhaustive",
        "missing cases in switch of type Color: Red, Blue",
        3,
        2,
    );

    let partial = "package p\n\nfunc f(c int) {\n\tswitch c {\n\tcase Red:\n\t}\n}\n";
    let diagnostic_partial = Diagnostic::new(
        "exhaustive",
        "missing cases in switch of type Color: Red, Blue",
        4,
        2,
    );
    let mut source = GoSource::parse(partial).unwrap();
    let resolution = source.fix(&registry, &diagnostic_partial, 3).unwrap();
    source.apply(&resolution.edits()[0]).unwrap();
    assert_eq!(
        source.text(),
        "package p\n\nfunc f(c int) {\n\tswitch c {\n\tcase Red:\n\tcase Blue:\n\t}\n}\n"
    );

    let with_default = "package p\n\nfunc f(c int) {\n\tswitch c {\n\tdefault:\n\t}\n}\n";
    let source = GoSource::parse(with_default).unwrap();
    let resolution = source.fix(&registry, &diagnostic, 3).unwrap();
    assert_eq!(resolution.highlight().map(|r| r.len()), Some(1));
    assert!(resolution.edits().is_empty());
}

const SCALE: &str = "package p\n\nfunc scale(v int, factor int) int {\n\treturn v * factor\n}\n";

#[test]
fn test_unparam_adds_suppression_comment() {
    let diagnostic = Diagnostic::new("unparam", "scale - factor always receives 2", 3, 19);

    let source = GoSource::parse(SCALE).unwrap();
    assert_eq!(
        highlighted(SCALE, &resolve(&source, &diagnostic)),
        "factor int"
    );
    assert_eq!(
        fixed(SCALE, &diagnostic),
        "package p\n\n//nolint:unparam\nfunc scale(v int, factor int) int {\n\treturn v * factor\n}\n"
    );
}

#[test]
fn test_unparam_extends_existing_directive() {
    let text = "package p\n\n//nolint:funlen // generated\nfunc scale(v int, factor int) int {\n\treturn v * factor\n}\n";
    let diagnostic = Diagnostic::new("unparam", "scale - factor always receives 2", 4, 19);
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\n//nolint:funlen,unparam // generated\nfunc scale(v int, factor int) int {\n\treturn v * factor\n}\n"
    );

    let suppressed = "package p\n\n//nolint:unparam\nfunc scale(v int, factor int) int {\n\treturn v * factor\n}\n";
    let source = GoSource::parse(suppressed).unwrap();
    let resolution = resolve(&source, &diagnostic);
    assert!(resolution.edits().is_empty());
    assert!(!resolution.is_not_found());
}

#[test]
fn test_function_linters_suppress_the_function() {
    let text = "package p\n\n// Long does a lot.\nfunc Long() {\n}\n";
    let diagnostic = Diagnostic::new("funlen", "Function 'Long' is too long (70 > 60)", 4, 1);

    let source = GoSource::parse(text).unwrap();
    assert_eq!(resolve(&source, &diagnostic).highlight(), None);
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\n// Long does a lot.\n//nolint:funlen\nfunc Long() {\n}\n"
    );
}

#[test]
fn test_nlreturn_inserts_blank_line() {
    let text = "package p\n\nfunc f() int {\n\tx := 1\n\treturn x\n}\n";
    let diagnostic = Diagnostic::new("nlreturn", "return with no blank line before", 5, 2);
    assert_eq!(
        fixed(text, &diagnostic),
        "package p\n\nfunc f() int {\n\tx := 1\n\n\treturn x\n}\n"
    );
}

#[test]
fn test_highlight_only_rules() {
    let text = "package p\n\ntype S struct {\n\ta bool\n\tb int64\n}\n\nfunc f() int {\n\ttimeout := 30\n\tif timeout > 0 {\n\t\treturn timeout\n\t}\n\treturn 0\n}\n";
    let source = GoSource::parse(text).unwrap();

    let gomnd = Diagnostic::new("gomnd", "mnd: Magic number: 30, in <assign> detected", 9, 13);
    let resolution = resolve(&source, &gomnd);
    assert!(resolution.edits().is_empty());
    assert_eq!(highlighted(text, &resolution), "30");

    let maligned = Diagnostic::new("maligned", "struct of size 16 could be 16", 3, 6);
    let resolution = resolve(&source, &maligned);
    assert!(highlighted(text, &resolution).starts_with("struct {"));

    let gocritic = Diagnostic::new("gocritic", "ifElseChain: rewrite if-else to switch", 10, 2);
    let resolution = resolve(&source, &gocritic);
    assert!(highlighted(text, &resolution).starts_with("if timeout > 0 {"));

    let dupl = Diagnostic::new("dupl", "9-10 lines are duplicate", 9, 1).with_line_range(9, 10);
    let resolution = resolve(&source, &dupl);
    assert_eq!(highlighted(text, &resolution), "\ttimeout := 30");
}

#[test]
fn test_explanation_edit_cannot_be_applied() {
    let mut source = GoSource::parse("package p\n").unwrap();
    let resolution = resolve(&source, &Diagnostic::new("gofumpt", "File is not gofumpt-ed", 1, 1));
    let (edits, highlight) = resolution.into_parts();
    assert_eq!(highlight, None);
    assert!(edits[0].url().is_some_and(|url| url.ends_with("/gofumpt.md")));

    let err = source.apply(&edits[0]).unwrap_err();
    assert!(matches!(err, GoSyntaxError::Edit(FixError::NotATextEdit(_))));
    assert_eq!(source.text(), "package p\n");
}

#[test]
fn test_bindings_are_classified_apart_from_references() {
    let text = "package p\n\nfunc f(xs []int) {\n\tfor i := range xs {\n\t\t_ = i\n\t}\n\tj := 0\n\tfor j = range xs {\n\t}\n\t_ = j\n}\n";
    let source = GoSource::parse(text).unwrap();
    let root = source.tree().root_node();

    let kind_at = |needle: &str| {
        let start = text.find(needle).unwrap();
        let node = root.descendant_for_byte_range(start, start + 1).unwrap();
        classify(node)
    };
    assert_eq!(kind_at("xs []"), NodeKind::Identifier);
    assert_eq!(kind_at("i :="), NodeKind::Identifier);
    assert_eq!(kind_at("i\n"), NodeKind::Reference);
    assert_eq!(kind_at("j :="), NodeKind::Identifier);
    assert_eq!(kind_at("j = range"), NodeKind::Reference);
}

#[test]
fn test_fixture_fixes_apply_in_sequence_with_drift() {
    let mut source = GoSource::parse(include_str!("fixtures/sample.go")).unwrap();
    let registry = Registry::builtin();

    // All three findings were reported against the original file.
    let goconst = Diagnostic::new("goconst", "string `hello ` has 2 occurrences", 7, 14);
    let godot = Diagnostic::new("godot", "Comment should end in a period", 5, 1);
    let nlreturn = Diagnostic::new("nlreturn", "return with no blank line before", 9, 2);

    let resolution = source.fix(registry, &goconst, 6).unwrap();
    source.apply(&resolution.edits()[0]).unwrap();

    // The constant declaration pushed everything below it down two lines.
    let resolution = source.fix(registry, &godot, 6).unwrap();
    source.apply(&resolution.edits()[0]).unwrap();
    let resolution = source.fix(registry, &nlreturn, 10).unwrap();
    source.apply(&resolution.edits()[0]).unwrap();

    assert!(!source.has_errors());
    assert_eq!(
        source.text(),
        "package sample\n\nimport \"fmt\"\n\nconst hello = \"hello \"\n\n// Greet prints a greeting.\nfunc Greet(name string) {\n\tfmt.Println(hello + name)\n\tfmt.Println(hello + name)\n\n\treturn\n}\n"
    );
}
