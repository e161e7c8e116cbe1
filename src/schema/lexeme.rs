/// Word forms and lexemes — the inflected surface material templates
/// draw their text from.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::grammar::Grammeme;

#[derive(Debug, Error)]
pub enum LexemeError {
    #[error("lexeme has no word forms")]
    Empty,
}

/// A single spelling of a word together with the grammemes it satisfies.
///
/// Categories absent from the set are wildcards for matching purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForm {
    text: String,
    grammemes: FxHashSet<Grammeme>,
}

impl WordForm {
    pub fn new(text: impl Into<String>, grammemes: FxHashSet<Grammeme>) -> Self {
        Self {
            text: text.into(),
            grammemes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn grammemes(&self) -> &FxHashSet<Grammeme> {
        &self.grammemes
    }
}

/// All spellings of one word, in declaration order, plus the persistent
/// grammemes that hold for every spelling (e.g. a noun's gender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    persistent: FxHashSet<Grammeme>,
    forms: Vec<WordForm>,
}

impl Lexeme {
    pub fn new(persistent: FxHashSet<Grammeme>, forms: Vec<WordForm>) -> Self {
        Self { persistent, forms }
    }

    /// An invariant word with a single spelling and no grammemes, e.g. a
    /// proper noun. Such a lexeme returns its one form no matter what
    /// grammemes a placeholder requests.
    pub fn single_form(text: impl Into<String>) -> Self {
        Self {
            persistent: FxHashSet::default(),
            forms: vec![WordForm::new(text, FxHashSet::default())],
        }
    }

    pub fn persistent_grammemes(&self) -> &FxHashSet<Grammeme> {
        &self.persistent
    }

    pub fn forms(&self) -> &[WordForm] {
        &self.forms
    }

    /// The grammemes a chosen form contributes to agreement: the form's
    /// own set plus this lexeme's persistent grammemes.
    pub fn effective_grammemes(&self, form: &WordForm) -> FxHashSet<Grammeme> {
        self.persistent.union(form.grammemes()).copied().collect()
    }

    /// Pick the form that best matches `required`.
    ///
    /// A form is disqualified if it (or the lexeme's persistent set)
    /// carries a grammeme whose category appears in `required` with a
    /// different value. Among the rest, the highest count of satisfied
    /// required grammemes wins; ties go to the earliest-declared form.
    /// If every form is disqualified, the first-declared form (the
    /// citation form by vocabulary convention) is returned.
    pub fn best_form(&self, required: &FxHashSet<Grammeme>) -> Result<&WordForm, LexemeError> {
        let first = self.forms.first().ok_or(LexemeError::Empty)?;
        let mut best: Option<(usize, &WordForm)> = None;
        for form in &self.forms {
            let disqualified = form
                .grammemes()
                .iter()
                .chain(self.persistent.iter())
                .any(|owned| {
                    required
                        .iter()
                        .any(|need| need.category() == owned.category() && need != owned)
                });
            if disqualified {
                continue;
            }
            let score = required
                .iter()
                .filter(|need| {
                    form.grammemes().contains(need) || self.persistent.contains(need)
                })
                .count();
            // Strict `>` keeps the earliest-declared form on ties.
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, form));
            }
        }
        Ok(best.map_or(first, |(_, form)| form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::grammar::Category;

    const NUMBER: Category = Category("Number");
    const PERSON: Category = Category("Person");
    const CASE: Category = Category("Case");
    const SING: Grammeme = Grammeme::new(NUMBER, "Sing");
    const PLUR: Grammeme = Grammeme::new(NUMBER, "Plur");
    const III: Grammeme = Grammeme::new(PERSON, "III");
    const NOM: Grammeme = Grammeme::new(CASE, "Nom");
    const GEN: Grammeme = Grammeme::new(CASE, "Gen");

    fn set(grammemes: &[Grammeme]) -> FxHashSet<Grammeme> {
        grammemes.iter().copied().collect()
    }

    fn eat_lexeme() -> Lexeme {
        Lexeme::new(
            FxHashSet::default(),
            vec![
                WordForm::new("eat", FxHashSet::default()),
                WordForm::new("eats", set(&[III, SING])),
            ],
        )
    }

    #[test]
    fn single_form_lexeme_ignores_requirements() {
        let bear = Lexeme::single_form("bear");
        assert_eq!(bear.best_form(&set(&[PLUR, GEN])).unwrap().text(), "bear");
    }

    #[test]
    fn default_form_wins_without_requirements() {
        assert_eq!(
            eat_lexeme().best_form(&FxHashSet::default()).unwrap().text(),
            "eat"
        );
    }

    #[test]
    fn highest_intersection_wins() {
        assert_eq!(
            eat_lexeme().best_form(&set(&[III, SING])).unwrap().text(),
            "eats"
        );
    }

    #[test]
    fn partial_match_beats_wildcard() {
        assert_eq!(eat_lexeme().best_form(&set(&[III])).unwrap().text(), "eats");
    }

    #[test]
    fn contradicting_form_is_disqualified() {
        // "eats" carries Sing, which contradicts the required Plur.
        assert_eq!(
            eat_lexeme().best_form(&set(&[III, PLUR])).unwrap().text(),
            "eat"
        );
    }

    #[test]
    fn ties_go_to_declaration_order() {
        let lexeme = Lexeme::new(
            FxHashSet::default(),
            vec![
                WordForm::new("wolf", set(&[NOM])),
                WordForm::new("beast", set(&[NOM])),
            ],
        );
        assert_eq!(lexeme.best_form(&set(&[NOM])).unwrap().text(), "wolf");
    }

    #[test]
    fn falls_back_to_citation_form_when_all_disqualified() {
        let lexeme = Lexeme::new(
            FxHashSet::default(),
            vec![
                WordForm::new("wolf", set(&[NOM])),
                WordForm::new("wolf's", set(&[GEN])),
            ],
        );
        // Dat contradicts both Nom and Gen, so no form qualifies.
        let dative = Grammeme::new(CASE, "Dat");
        assert_eq!(lexeme.best_form(&set(&[dative])).unwrap().text(), "wolf");
    }

    #[test]
    fn persistent_grammemes_join_matching() {
        // A pluralia-tantum noun: every form is plural.
        let scissors = Lexeme::new(
            set(&[PLUR]),
            vec![WordForm::new("scissors", FxHashSet::default())],
        );
        assert_eq!(
            scissors.best_form(&set(&[PLUR])).unwrap().text(),
            "scissors"
        );
        // A singular requirement contradicts the persistent Plur for every
        // form, so the citation form comes back.
        assert_eq!(
            scissors.best_form(&set(&[SING])).unwrap().text(),
            "scissors"
        );
    }

    #[test]
    fn persistent_grammemes_join_agreement_extraction() {
        let bear = Lexeme::new(
            set(&[III]),
            vec![
                WordForm::new("bear", set(&[SING])),
                WordForm::new("bears", set(&[PLUR])),
            ],
        );
        let form = bear.best_form(&set(&[SING])).unwrap();
        let effective = bear.effective_grammemes(form);
        assert!(effective.contains(&III));
        assert!(effective.contains(&SING));
        assert!(!effective.contains(&PLUR));
    }

    #[test]
    fn empty_lexeme_fails() {
        let empty = Lexeme::new(FxHashSet::default(), Vec::new());
        assert!(matches!(
            empty.best_form(&FxHashSet::default()),
            Err(LexemeError::Empty)
        ));
    }
}
