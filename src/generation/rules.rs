//! Business rules for the generation domain

use std::collections::HashSet;

use crate::generation::{GenerationError, GrammarModel, Target};

/// Symbols that would collide in `target`, in input order, each listed once
pub fn find_collisions<'a, I>(target: &dyn Target, symbols: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    symbols
        .into_iter()
        .filter(|symbol| target.would_collide(symbol) && seen.insert(*symbol))
        .collect()
}

/// Refuse to generate a grammar whose symbols collide in `target`
pub fn ensure_no_collisions(
    target: &dyn Target,
    grammar: &GrammarModel,
) -> Result<(), GenerationError> {
    let collisions = find_collisions(target, grammar.symbols().map(|(_, symbol)| symbol));
    if collisions.is_empty() {
        return Ok(());
    }

    for (kind, symbol) in grammar.symbols() {
        if collisions.contains(&symbol) {
            tracing::warn!(
                target_language = target.name(),
                %kind,
                symbol,
                "Symbol conflicts with generated code"
            );
        }
    }

    Err(GenerationError::ReservedSymbol {
        target: target.name().to_string(),
        symbols: collisions.into_iter().map(str::to_string).collect(),
    })
}
