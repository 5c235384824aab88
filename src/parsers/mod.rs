//! Output parsers: pure converters from raw tool text to candidate records.
//!
//! Every parser is a total function over arbitrary text. Lines that do not
//! match the expected grammar are skipped silently; a parser never fails,
//! it only under-reports. Config acceptance is part of the declared
//! interface ([`ParserFn`]) rather than a runtime fallback.

pub mod one_line;
pub mod pipe;

use crate::config::EffectiveConfig;

/// A structured record produced by an output parser.
///
/// Always resolvable to a location and line; the remaining fields are
/// family-specific and feed message construction. A missing line resolves
/// to 0, never to a negative or absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffenseCandidate {
    /// Source file the finding points at.
    pub location: String,
    /// 1-based line, or 0 when the tool output carried none.
    pub line: u32,
    /// Documented object path (e.g. `Foo::Bar#baz`).
    pub element: Option<String>,
    /// Bare method name for method-scoped families.
    pub method_name: Option<String>,
    /// Dynamic offense sub-kind overriding the family default name.
    pub name: Option<String>,
    /// Pre-built message text (warning families).
    pub message: Option<String>,
    /// Family-specific payload (expected tag order, api value, ...).
    pub detail: Option<String>,
}

/// A parser function with its config requirement declared up front.
#[derive(Clone, Copy)]
pub enum ParserFn {
    /// `text -> candidates`
    Plain(fn(&str) -> Vec<OffenseCandidate>),
    /// `(text, config) -> candidates`
    WithConfig(fn(&str, &EffectiveConfig) -> Vec<OffenseCandidate>),
}

impl ParserFn {
    /// Invoke the parser, supplying config only where it is declared.
    pub fn call(&self, text: &str, config: &EffectiveConfig) -> Vec<OffenseCandidate> {
        match self {
            ParserFn::Plain(f) => f(text),
            ParserFn::WithConfig(f) => f(text, config),
        }
    }
}

impl std::fmt::Debug for ParserFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserFn::Plain(_) => write!(f, "ParserFn::Plain"),
            ParserFn::WithConfig(_) => write!(f, "ParserFn::WithConfig"),
        }
    }
}

/// Parse `path:LINE: Element` object listings.
///
/// This is the grammar of the tool's object list output:
///
/// ```text
/// /path/to/file.rb:3: UndocumentedClass
/// /path/to/file.rb:4: UndocumentedClass#method_one
/// ```
pub fn object_list(text: &str) -> Vec<OffenseCandidate> {
    use regex::Regex;
    use std::sync::LazyLock;

    static LINE_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(.+):(\d+): (.+)$").unwrap());

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let caps = LINE_REGEX.captures(line)?;
            Some(OffenseCandidate {
                location: caps[1].to_string(),
                line: caps[2].parse().unwrap_or(0),
                element: Some(caps[3].to_string()),
                ..Default::default()
            })
        })
        .collect()
}

/// Parse `path:LINE: Class#method` listings, extracting the method name.
///
/// ```text
/// /path/to/file.rb:10: Platform::Analysis::Authors#initialize
/// ```
pub fn method_list(text: &str) -> Vec<OffenseCandidate> {
    use regex::Regex;
    use std::sync::LazyLock;

    static LOCATION_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(.+):(\d+):\s+(.+)[#.]([^#.]+)$").unwrap());

    text.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let caps = LOCATION_REGEX.captures(line)?;
            Some(OffenseCandidate {
                location: caps[1].to_string(),
                line: caps[2].parse().unwrap_or(0),
                element: Some(format!("{}#{}", &caps[3], &caps[4])),
                method_name: Some(caps[4].to_string()),
                ..Default::default()
            })
        })
        .collect()
}
