//! Grammar description consumed by the generator
//!
//! Parsing grammars is done elsewhere; the generator receives the already
//! analysed symbols and the serialized automaton as a YAML or JSON document:
//!
//! ```yaml
//! name: Calc
//! rules: [prog, expr]
//! tokens: [NUMBER, PLUS, WS]
//! literal_names: ["'+'"]
//! serialized_atn: [3, 24, 0, 7]
//! ```

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::generation::GenerationError;

static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Analysed grammar ready for code generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarModel {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub tokens: Vec<String>,
    /// Literal token text as written in the grammar, quotes included (`'+'`)
    #[serde(default)]
    pub literal_names: Vec<String>,
    #[serde(default)]
    pub serialized_atn: Vec<u16>,
}

/// Where a grammar-visible symbol was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Grammar,
    Rule,
    Token,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Grammar => write!(f, "grammar"),
            SymbolKind::Rule => write!(f, "rule"),
            SymbolKind::Token => write!(f, "token"),
        }
    }
}

impl GrammarModel {
    /// Load a grammar description; `.json` files are read as JSON, anything
    /// else as YAML
    pub fn from_path(path: &Path) -> Result<Self, GenerationError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed: Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };
        let grammar: Self = parsed
            .map_err(|e| GenerationError::InvalidGrammar(format!("{}: {e}", path.display())))?;

        grammar.validate()?;
        Ok(grammar)
    }

    /// Every symbol that appears verbatim in generated code, in declaration order
    pub fn symbols(&self) -> impl Iterator<Item = (SymbolKind, &str)> {
        std::iter::once((SymbolKind::Grammar, self.name.as_str()))
            .chain(self.rules.iter().map(|r| (SymbolKind::Rule, r.as_str())))
            .chain(self.tokens.iter().map(|t| (SymbolKind::Token, t.as_str())))
    }

    /// Check that every symbol is a plain identifier
    pub fn validate(&self) -> Result<(), GenerationError> {
        for (kind, symbol) in self.symbols() {
            if !IDENTIFIER_RE.is_match(symbol) {
                return Err(GenerationError::InvalidGrammar(format!(
                    "{kind} name '{symbol}' is not a valid identifier"
                )));
            }
        }
        Ok(())
    }
}
