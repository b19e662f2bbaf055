//! Grammar table: the immutable symbol-to-replacement mapping of an L-System.

use crate::error::{GrammarSyntaxError, SyntaxFault};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The two-character separator between a rule's key and its replacement.
pub const RULE_SEPARATOR: &str = "->";

/// Marks a rule line as a comment. Any line containing it is skipped.
pub const COMMENT_MARKER: char = '#';

/// A replacement string together with its length in symbols.
///
/// The symbol count is cached so that the derivation engine can enforce its
/// length bound without rescanning UTF-8 on every substitution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    text: String,
    symbols: usize,
}

impl Production {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let symbols = text.chars().count();
        Self { text, symbols }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of symbols (not bytes) in the replacement.
    pub fn symbol_count(&self) -> usize {
        self.symbols
    }
}

/// An immutable mapping from single symbols to their replacement strings.
///
/// Built once per run, either from rule text via [`parse_rules`] or from a
/// key/value map (the serde representation). Both paths apply the same entry
/// checks, so [`Display`](fmt::Display) output always re-parses to an equal table. Symbols without an entry are
/// rewritten to themselves by the derivation engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct GrammarTable {
    rules: BTreeMap<char, Production>,
}

impl GrammarTable {
    /// Creates an empty table (every symbol maps to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(symbol, replacement)` pairs. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Each pair is checked like a rule line; the error's `line` is the
    /// 1-based position of the offending pair.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, GrammarSyntaxError>
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut rules = BTreeMap::new();
        for (idx, (sym, text)) in pairs.into_iter().enumerate() {
            let (key, value) = (sym.to_string(), text.as_ref());
            let (symbol, prod) = validate_entry(&key, value)
                .map_err(|fault| entry_error(idx + 1, &key, value, fault))?;
            rules.insert(symbol, prod);
        }
        Ok(Self { rules })
    }

    /// Returns the production registered for `symbol`, if any.
    pub fn production(&self, symbol: char) -> Option<&Production> {
        self.rules.get(&symbol)
    }

    /// Returns the replacement text registered for `symbol`, if any.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(Production::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over `(symbol, replacement)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(&sym, prod)| (sym, prod.as_str()))
    }
}

/// Parses line-oriented rule text (`<symbol> -> <replacement>`) into a [`GrammarTable`].
///
/// Blank lines and lines containing `#` are skipped. Whitespace around the
/// symbol and the replacement is insignificant. A repeated key overwrites the
/// earlier one.
///
/// # Errors
///
/// Returns a [`GrammarSyntaxError`] carrying the 1-based line number for the
/// first line that has no separator, more than one separator, an empty key,
/// a key longer than one symbol or a stray line break.
pub fn parse_rules(text: &str) -> Result<GrammarTable, GrammarSyntaxError> {
    let mut rules = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() || raw.contains(COMMENT_MARKER) {
            continue;
        }
        let line = idx + 1;
        let fail = |fault| GrammarSyntaxError {
            line,
            text: raw.to_string(),
            fault,
        };

        let (key, value) = raw
            .split_once(RULE_SEPARATOR)
            .ok_or_else(|| fail(SyntaxFault::MissingSeparator))?;
        let (symbol, prod) = validate_entry(key, value).map_err(fail)?;
        rules.insert(symbol, prod);
    }

    Ok(GrammarTable { rules })
}

/// Checks one `key -> value` entry, whatever its source, so that every table
/// renders back into rule text that re-parses to the same table.
fn validate_entry(key: &str, value: &str) -> Result<(char, Production), SyntaxFault> {
    let (key, value) = (key.trim(), value.trim());
    if key.contains(COMMENT_MARKER) || value.contains(COMMENT_MARKER) {
        return Err(SyntaxFault::CommentMarker);
    }
    if value.contains(['\n', '\r']) {
        return Err(SyntaxFault::LineBreak);
    }
    if value.contains(RULE_SEPARATOR) {
        return Err(SyntaxFault::RepeatedSeparator);
    }

    let mut chars = key.chars();
    let symbol = match (chars.next(), chars.next()) {
        (None, _) => return Err(SyntaxFault::EmptyKey),
        (Some(sym), None) => sym,
        (Some(_), Some(_)) => return Err(SyntaxFault::MultiSymbolKey),
    };
    Ok((symbol, Production::new(value)))
}

fn entry_error(line: usize, key: &str, value: &str, fault: SyntaxFault) -> GrammarSyntaxError {
    GrammarSyntaxError {
        line,
        text: format!("{key} {RULE_SEPARATOR} {value}"),
        fault,
    }
}

impl FromStr for GrammarTable {
    type Err = GrammarSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rules(s)
    }
}

/// Renders the table back into rule text, one `key -> value` line per rule.
///
/// The output re-parses to an identical table.
impl fmt::Display for GrammarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (sym, text)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{sym} {RULE_SEPARATOR} {text}")?;
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<String, String>> for GrammarTable {
    type Error = GrammarSyntaxError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut rules = BTreeMap::new();
        for (idx, (key, value)) in map.iter().enumerate() {
            let (symbol, prod) = validate_entry(key, value)
                .map_err(|fault| entry_error(idx + 1, key, value, fault))?;
            rules.insert(symbol, prod);
        }
        Ok(Self { rules })
    }
}

impl From<GrammarTable> for BTreeMap<String, String> {
    fn from(table: GrammarTable) -> Self {
        table
            .rules
            .into_iter()
            .map(|(sym, prod)| (sym.to_string(), prod.text))
            .collect()
    }
}
