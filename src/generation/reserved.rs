//! Reserved-word sets for collision detection
//!
//! A grammar author picks rule and token names without knowing which language
//! the grammar will be generated for. Any name found in a target's reserved
//! set must not be emitted verbatim. The set is deliberately broad: it holds
//! the language keywords and the generator's own sentinel identifiers.

use std::collections::HashSet;

use once_cell::sync::OnceCell;

/// Immutable set of identifiers a target must never emit unqualified.
///
/// Built on first query and memoized. Concurrent first queries race only on
/// the [`OnceCell`], so every reader observes the same fully populated set.
#[derive(Debug)]
pub struct ReservedWords {
    keywords: &'static [&'static str],
    generator_words: &'static [&'static str],
    words: OnceCell<HashSet<&'static str>>,
}

impl ReservedWords {
    /// `keywords` are the target-language keywords; `generator_words` are
    /// identifiers the generated code itself relies on
    pub const fn new(
        keywords: &'static [&'static str],
        generator_words: &'static [&'static str],
    ) -> Self {
        Self {
            keywords,
            generator_words,
            words: OnceCell::new(),
        }
    }

    /// Whether `identifier` is reserved
    pub fn contains(&self, identifier: &str) -> bool {
        self.words().contains(identifier)
    }

    /// The populated set
    pub fn words(&self) -> &HashSet<&'static str> {
        self.words.get_or_init(|| {
            tracing::debug!(
                keywords = self.keywords.len(),
                generator_words = self.generator_words.len(),
                "Populating reserved word set"
            );
            self.keywords
                .iter()
                .chain(self.generator_words)
                .copied()
                .collect()
        })
    }

    /// Whether the set has been built yet
    pub fn is_populated(&self) -> bool {
        self.words.get().is_some()
    }

    /// Sorted copy of the set, for display
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut words: Vec<_> = self.words().iter().copied().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: &[&str] = &["class", "new"];
    const GENERATOR_WORDS: &[&str] = &["rule"];

    #[test]
    fn test_population_is_deferred() {
        let reserved = ReservedWords::new(KEYWORDS, GENERATOR_WORDS);
        assert!(!reserved.is_populated());

        assert!(reserved.contains("class"));
        assert!(reserved.is_populated());
    }

    #[test]
    fn test_contains_keywords_and_generator_words() {
        let reserved = ReservedWords::new(KEYWORDS, GENERATOR_WORDS);

        assert!(reserved.contains("class"));
        assert!(reserved.contains("new"));
        assert!(reserved.contains("rule"));
        assert!(!reserved.contains("myRule"));
        assert!(!reserved.contains("Class"));
        assert!(!reserved.contains(""));
        assert_eq!(reserved.words().len(), 3);
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let reserved = ReservedWords::new(KEYWORDS, GENERATOR_WORDS);
        let first: Vec<bool> = ["class", "expr", "rule"]
            .iter()
            .map(|word| reserved.contains(word))
            .collect();

        for _ in 0..10 {
            let again: Vec<bool> = ["class", "expr", "rule"]
                .iter()
                .map(|word| reserved.contains(word))
                .collect();
            assert_eq!(first, again);
        }
        assert!(std::ptr::eq(reserved.words(), reserved.words()));
    }

    #[test]
    fn test_duplicates_collapse() {
        const DUPLICATED: &[&str] = &["rule", "class"];
        let reserved = ReservedWords::new(KEYWORDS, DUPLICATED);
        assert_eq!(reserved.sorted(), vec!["class", "new", "rule"]);
    }

    #[test]
    fn test_concurrent_first_access_converges() {
        let reserved = ReservedWords::new(KEYWORDS, GENERATOR_WORDS);

        let sets: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        assert!(reserved.contains("new"));
                        reserved.words() as *const _ as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(sets.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(reserved.words().len(), 3);
    }
}
