/// Per-render state — the caller's argument and vocabulary maps plus the
/// forms already chosen during this render pass.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;

use crate::schema::grammar::Grammeme;
use crate::schema::lexeme::Lexeme;

/// Created at the start of one `fill_up` call and discarded at the end.
/// Records every placeholder's chosen form under its source name so later
/// agreement lookups can observe it. Never escapes the render.
#[derive(Debug)]
pub struct RenderContext<'a> {
    arguments: &'a HashMap<String, Lexeme>,
    vocabulary: &'a HashMap<String, Lexeme>,
    resolved: FxHashMap<String, FxHashSet<Grammeme>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        arguments: &'a HashMap<String, Lexeme>,
        vocabulary: &'a HashMap<String, Lexeme>,
    ) -> Self {
        Self {
            arguments,
            vocabulary,
            resolved: FxHashMap::default(),
        }
    }

    pub fn argument(&self, name: &str) -> Option<&'a Lexeme> {
        self.arguments.get(name)
    }

    pub fn vocabulary_entry(&self, name: &str) -> Option<&'a Lexeme> {
        self.vocabulary.get(name)
    }

    /// The effective grammeme set of the form chosen for `name` earlier in
    /// this render, if any placeholder has resolved that name yet.
    pub fn resolved_grammemes(&self, name: &str) -> Option<&FxHashSet<Grammeme>> {
        self.resolved.get(name)
    }

    /// Record the chosen form's grammemes under the resolving placeholder's
    /// source name.
    pub fn record(&mut self, name: &str, grammemes: FxHashSet<Grammeme>) {
        self.resolved.insert(name.to_string(), grammemes);
    }
}
