/// Grammatical feature vocabulary — categories, grammemes, and the
/// per-language grammar that resolves markup names to grammemes.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("language defines no grammeme named `{0}`")]
    UnknownGrammeme(String),
}

/// A grammatical category: Number, Person, Case, Gender.
///
/// Each grammeme belongs to exactly one category. Categories are compared
/// by their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category(pub &'static str);

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One value of one grammatical category, e.g. Number=Plur.
///
/// Grammemes are opaque and compared structurally. A language exposes its
/// closed set as constants (see the `languages` module) and maps markup
/// names onto them through its [`Grammar`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammeme {
    category: Category,
    name: &'static str,
}

impl Grammeme {
    pub const fn new(category: Category, name: &'static str) -> Self {
        Self { category, name }
    }

    /// The category this grammeme is a value of.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The markup name of this grammeme.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category.0, self.name)
    }
}

/// The closed, enumerable set of grammemes one language understands,
/// keyed by markup name.
///
/// Immutable after construction; safe to share read-only across
/// concurrent renders.
#[derive(Debug, Clone)]
pub struct Grammar {
    by_name: FxHashMap<&'static str, Grammeme>,
}

impl Grammar {
    pub fn new(grammemes: impl IntoIterator<Item = Grammeme>) -> Self {
        Self {
            by_name: grammemes.into_iter().map(|g| (g.name(), g)).collect(),
        }
    }

    /// Resolve a markup name to a grammeme of this language.
    pub fn grammeme_by_name(&self, name: &str) -> Result<Grammeme, GrammarError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GrammarError::UnknownGrammeme(name.to_string()))
    }

    /// All grammemes of this language.
    pub fn all_grammemes(&self) -> FxHashSet<Grammeme> {
        self.by_name.values().copied().collect()
    }
}
