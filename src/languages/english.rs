/// English — grammemes for number, person, and verbal form.

use super::Language;
use crate::schema::grammar::{Category, Grammar, Grammeme};

pub const NUMBER: Category = Category("Number");
pub const PERSON: Category = Category("Person");
pub const VERB_FORM: Category = Category("VerbForm");

/// Singular.
pub const SING: Grammeme = Grammeme::new(NUMBER, "Sing");
/// Plural.
pub const PLUR: Grammeme = Grammeme::new(NUMBER, "Plur");
/// First person.
pub const I: Grammeme = Grammeme::new(PERSON, "I");
/// Second person.
pub const II: Grammeme = Grammeme::new(PERSON, "II");
/// Third person.
pub const III: Grammeme = Grammeme::new(PERSON, "III");
/// Gerund.
pub const GER: Grammeme = Grammeme::new(VERB_FORM, "Ger");

pub struct English {
    grammar: Grammar,
}

impl English {
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new([SING, PLUR, I, II, III, GER]),
        }
    }
}

impl Default for English {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for English {
    fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    fn missing_lexeme_format(&self) -> &str {
        "word \"%s\" is missing from the vocabulary"
    }

    fn name(&self) -> &str {
        "English"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_grammar() {
        assert_eq!(
            English::new().grammar().grammeme_by_name("III").unwrap(),
            III
        );
    }

    #[test]
    fn grammar_is_closed() {
        assert_eq!(English::new().grammar().all_grammemes().len(), 6);
        assert!(English::new().grammar().grammeme_by_name("Nom").is_err());
    }

    #[test]
    fn has_missing_lexeme_format() {
        assert!(English::new().missing_lexeme_format().contains("%s"));
    }
}
