/// Russian — grammemes for case, number, gender, and person.

use super::Language;
use crate::schema::grammar::{Category, Grammar, Grammeme};

pub const CASE: Category = Category("Case");
pub const NUMBER: Category = Category("Number");
pub const GENDER: Category = Category("Gender");
pub const PERSON: Category = Category("Person");

/// Именительный падеж (nominative).
pub const NOM: Grammeme = Grammeme::new(CASE, "Nom");
/// Родительный падеж (genitive).
pub const GEN: Grammeme = Grammeme::new(CASE, "Gen");
/// Дательный падеж (dative).
pub const DAT: Grammeme = Grammeme::new(CASE, "Dat");
/// Винительный падеж (accusative).
pub const ACC: Grammeme = Grammeme::new(CASE, "Acc");
/// Творительный падеж (instrumental).
pub const INS: Grammeme = Grammeme::new(CASE, "Ins");
/// Предложный падеж (prepositional).
pub const PREP: Grammeme = Grammeme::new(CASE, "Prep");

pub const SING: Grammeme = Grammeme::new(NUMBER, "Sing");
pub const PLUR: Grammeme = Grammeme::new(NUMBER, "Plur");

pub const MASC: Grammeme = Grammeme::new(GENDER, "Masc");
pub const FEM: Grammeme = Grammeme::new(GENDER, "Fem");
pub const NEUT: Grammeme = Grammeme::new(GENDER, "Neut");

pub const I: Grammeme = Grammeme::new(PERSON, "I");
pub const II: Grammeme = Grammeme::new(PERSON, "II");
pub const III: Grammeme = Grammeme::new(PERSON, "III");

pub struct Russian {
    grammar: Grammar,
}

impl Russian {
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new([
                NOM, GEN, DAT, ACC, INS, PREP, SING, PLUR, MASC, FEM, NEUT, I, II, III,
            ]),
        }
    }
}

impl Default for Russian {
    fn default() -> Self {
        Self::new()
    }
}

impl Language for Russian {
    fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    fn missing_lexeme_format(&self) -> &str {
        "в словаре нет слова \"%s\""
    }

    fn name(&self) -> &str {
        "Russian"
    }
}
