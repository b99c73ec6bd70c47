//! Heuristic code-smell detection.
//!
//! This is not a parser. Each heuristic is a cheap textual check that may
//! misfire either way; a fired check only decides which archetypes hatch.

use bugzoo_data::BugCategory;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

const MAX_NESTING_DEPTH: i64 = 4;
const MAX_LOG_CALLS: usize = 5;

/// `\s` as browser regexes see it; also the set `trim` strips there.
const SPACE_CLASS: &str = r"(?u:[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}])";

/// Whether `c` is in [`SPACE_CLASS`].
#[must_use]
pub fn is_browser_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Compiles a case-insensitive pattern with browser-regex semantics.
///
/// `\w` and letter case folding stay ASCII, `\s` is [`SPACE_CLASS`], and the
/// negated delimiter classes still step over any character.
fn browser_regex(pattern: &str) -> Regex {
    let translated = pattern
        .replace(r"\s", SPACE_CLASS)
        .replace("[^)]", "(?u:[^)])")
        .replace("[^}]", "(?u:[^}])");
    Regex::new(&format!("(?i-u){translated}")).expect("valid analyzer regex")
}

static INFINITE_LOOP: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"while\s*\([^)]*true[^)]*\)|for\s*\([^)]*;;[^)]*\)"));
static OFF_BY_ONE: LazyLock<Regex> = LazyLock::new(|| {
    browser_regex(r"for\s*\([^)]*<=\s*\w+\.length|for\s*\([^)]*<\s*\w+\.length\s*-\s*1")
});
static RESOURCE_ACQUIRE: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"\.open\(|\.connect\(|new\s+\w+Stream\("));
static RESOURCE_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"\.close\(|\.disconnect\(|finally"));
static SHARED_MUTATION: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"\.push\(|\.pop\(|\.shift\(|\.unshift\(|\+\+|--"));
static SYNCHRONIZATION: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"lock|mutex|synchronized|await|async"));
static CATCH_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"catch\s*\([^)]*\)\s*\{[^}]*\}|catch\s*\{"));
static TYPED_CATCH: LazyLock<Regex> = LazyLock::new(|| {
    browser_regex(r"catch\s*\([^)]*Error[^)]*\)|catch\s*\([^)]*Exception[^)]*\)")
});
static LOG_CALL: LazyLock<Regex> =
    LazyLock::new(|| browser_regex(r"console\.(log|error|warn|info)|print\("));

/// A code smell the analyzer can spot.
///
/// Declaration order is the canonical scan order; archetype selection
/// follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePattern {
    PotentialInfiniteLoop,
    OffByOneLoop,
    MissingResourceCleanup,
    SharedMutationNoLock,
    GenericCatch,
    DeepNesting,
    LogSpam,
    SyntaxError,
}

impl CodePattern {
    pub const ALL: [CodePattern; 8] = [
        CodePattern::PotentialInfiniteLoop,
        CodePattern::OffByOneLoop,
        CodePattern::MissingResourceCleanup,
        CodePattern::SharedMutationNoLock,
        CodePattern::GenericCatch,
        CodePattern::DeepNesting,
        CodePattern::LogSpam,
        CodePattern::SyntaxError,
    ];

    /// Bug category the smell hatches.
    #[must_use]
    pub fn category(self) -> BugCategory {
        match self {
            CodePattern::PotentialInfiniteLoop => BugCategory::InfiniteLoop,
            CodePattern::OffByOneLoop => BugCategory::OffByOne,
            CodePattern::MissingResourceCleanup => BugCategory::MemoryLeak,
            CodePattern::SharedMutationNoLock => BugCategory::RaceCondition,
            CodePattern::GenericCatch => BugCategory::NullPointer,
            CodePattern::DeepNesting => BugCategory::SpaghettiCode,
            CodePattern::LogSpam => BugCategory::LogSpam,
            CodePattern::SyntaxError => BugCategory::SyntaxError,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CodePattern::PotentialInfiniteLoop => "potential_infinite_loop",
            CodePattern::OffByOneLoop => "off_by_one_loop",
            CodePattern::MissingResourceCleanup => "missing_resource_cleanup",
            CodePattern::SharedMutationNoLock => "shared_mutation_no_lock",
            CodePattern::GenericCatch => "generic_catch",
            CodePattern::DeepNesting => "deep_nesting",
            CodePattern::LogSpam => "log_spam",
            CodePattern::SyntaxError => "syntax_error",
        }
    }

    fn detect(self, code: &str) -> bool {
        match self {
            CodePattern::PotentialInfiniteLoop => INFINITE_LOOP.is_match(code),
            CodePattern::OffByOneLoop => OFF_BY_ONE.is_match(code),
            CodePattern::MissingResourceCleanup => {
                RESOURCE_ACQUIRE.is_match(code) && !RESOURCE_RELEASE.is_match(code)
            }
            CodePattern::SharedMutationNoLock => {
                SHARED_MUTATION.is_match(code) && !SYNCHRONIZATION.is_match(code)
            }
            CodePattern::GenericCatch => CATCH_BLOCK.is_match(code) && !TYPED_CATCH.is_match(code),
            CodePattern::DeepNesting => max_brace_depth(code) > MAX_NESTING_DEPTH,
            CodePattern::LogSpam => LOG_CALL.find_iter(code).count() > MAX_LOG_CALLS,
            CodePattern::SyntaxError => has_unbalanced_delimiters(code),
        }
    }
}

impl fmt::Display for CodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs every heuristic and returns the ones that fired, in canonical order.
#[must_use]
pub fn analyze_code_patterns(code: &str) -> Vec<CodePattern> {
    CodePattern::ALL
        .into_iter()
        .filter(|p| p.detect(code))
        .collect()
}

/// Categories for the fired patterns, first occurrence wins.
#[must_use]
pub fn detected_categories(patterns: &[CodePattern]) -> Vec<BugCategory> {
    let mut out: Vec<BugCategory> = Vec::with_capacity(patterns.len());
    for category in patterns.iter().map(|p| p.category()) {
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Deepest `{` nesting reached; stray `}` may drive the running depth negative.
#[must_use]
pub fn max_brace_depth(code: &str) -> i64 {
    let mut depth = 0i64;
    let mut max_depth = 0i64;
    for ch in code.chars() {
        match ch {
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            '}' => depth -= 1,
            _ => {}
        }
    }
    max_depth
}

fn has_unbalanced_delimiters(code: &str) -> bool {
    let count = |c: char| code.chars().filter(|&x| x == c).count();
    count('{') != count('}') || count('(') != count(')') || count('[') != count(']')
}
