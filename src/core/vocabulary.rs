/// Vocabulary loading — named lexemes from RON files.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use rustc_hash::FxHashSet;

use crate::schema::grammar::{Grammar, GrammarError};
use crate::schema::lexeme::{Lexeme, WordForm};

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

// RON files spell grammemes by name; these intermediate structs bridge
// the file shape and the internal types.

#[derive(Debug, Deserialize)]
struct RonWordForm {
    text: String,
    #[serde(default)]
    grammemes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RonLexeme {
    #[serde(default)]
    persistent: Vec<String>,
    forms: Vec<RonWordForm>,
}

/// Named lexemes available to vocabulary-backed placeholders.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub lexemes: HashMap<String, Lexeme>,
}

impl Vocabulary {
    /// Load a vocabulary from a RON file, resolving grammeme names
    /// through `grammar` so a typo in the data fails fast.
    pub fn load_from_ron(path: &Path, grammar: &Grammar) -> Result<Vocabulary, VocabularyError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents, grammar)
    }

    /// Parse a vocabulary from a RON string.
    pub fn parse_ron(input: &str, grammar: &Grammar) -> Result<Vocabulary, VocabularyError> {
        let raw: HashMap<String, RonLexeme> = ron::from_str(input)?;
        let mut lexemes = HashMap::new();
        for (name, ron_lexeme) in raw {
            let mut persistent = FxHashSet::default();
            for grammeme_name in &ron_lexeme.persistent {
                persistent.insert(grammar.grammeme_by_name(grammeme_name)?);
            }
            let mut forms = Vec::with_capacity(ron_lexeme.forms.len());
            for ron_form in ron_lexeme.forms {
                let mut grammemes = FxHashSet::default();
                for grammeme_name in &ron_form.grammemes {
                    grammemes.insert(grammar.grammeme_by_name(grammeme_name)?);
                }
                forms.push(WordForm::new(ron_form.text, grammemes));
            }
            lexemes.insert(name, Lexeme::new(persistent, forms));
        }
        Ok(Vocabulary { lexemes })
    }

    /// Merge another vocabulary into this one. Entries from `other`
    /// override entries in `self` with the same name.
    pub fn merge(&mut self, other: Vocabulary) {
        for (name, lexeme) in other.lexemes {
            self.lexemes.insert(name, lexeme);
        }
    }
}
