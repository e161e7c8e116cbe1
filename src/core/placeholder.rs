/// Placeholder resolution — lexeme sources, agreement, and the three
/// placeholder shapes markup and callers can produce.

use rustc_hash::FxHashSet;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::capitalization::Capitalization;
use crate::core::context::RenderContext;
use crate::schema::grammar::Grammeme;
use crate::schema::lexeme::{Lexeme, LexemeError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("missing argument `{0}`")]
    MissingArgument(String),
    #[error("{message}")]
    MissingVocabularyEntry { name: String, message: String },
    #[error(transparent)]
    Lexeme(#[from] LexemeError),
    #[error("agreement target `{0}` has not been resolved")]
    UnresolvedAgreementTarget(String),
}

/// Where a placeholder's lexeme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexemeSource {
    /// A name looked up in the caller-supplied argument map.
    Argument(String),
    /// A name looked up in the vocabulary, with the language's
    /// missing-entry message format (one `%s` slot).
    Vocabulary {
        name: String,
        missing_format: String,
    },
}

impl LexemeSource {
    pub fn argument(name: impl Into<String>) -> Self {
        Self::Argument(name.into())
    }

    pub fn vocabulary(name: impl Into<String>, missing_format: impl Into<String>) -> Self {
        Self::Vocabulary {
            name: name.into(),
            missing_format: missing_format.into(),
        }
    }

    /// The name this source resolves. Doubles as the placeholder's
    /// identity for agreement lookups.
    pub fn name(&self) -> &str {
        match self {
            Self::Argument(name) => name,
            Self::Vocabulary { name, .. } => name,
        }
    }

    pub fn resolve<'a>(&self, context: &RenderContext<'a>) -> Result<&'a Lexeme, RenderError> {
        match self {
            Self::Argument(name) => context
                .argument(name)
                .ok_or_else(|| RenderError::MissingArgument(name.clone())),
            Self::Vocabulary {
                name,
                missing_format,
            } => context.vocabulary_entry(name).ok_or_else(|| {
                RenderError::MissingVocabularyEntry {
                    name: name.clone(),
                    message: missing_format.replacen("%s", name, 1),
                }
            }),
        }
    }
}

/// Extracts the grammemes a dependent placeholder must copy from an
/// already-resolved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agreement {
    /// Agree with the form chosen for the named argument earlier in the
    /// template.
    Argument(String),
}

impl Agreement {
    /// The argument name this agreement depends on.
    pub fn target(&self) -> &str {
        match self {
            Self::Argument(name) => name,
        }
    }

    /// The grammemes of the form chosen for the target earlier in this
    /// render. When no placeholder has resolved the target (possible only
    /// outside a validated template), the target lexeme's persistent
    /// grammemes stand in for the unchosen form.
    pub fn grammemes_to_agree_with(
        &self,
        context: &RenderContext<'_>,
    ) -> Result<FxHashSet<Grammeme>, RenderError> {
        match self {
            Self::Argument(name) => {
                if let Some(grammemes) = context.resolved_grammemes(name) {
                    return Ok(grammemes.clone());
                }
                match context.argument(name) {
                    Some(lexeme) => Ok(lexeme.persistent_grammemes().clone()),
                    None => Err(RenderError::UnresolvedAgreementTarget(name.clone())),
                }
            }
        }
    }
}

/// The fully configurable placeholder.
///
/// Value semantics: two placeholders built with equal source, grammemes,
/// agreement, and capitalization compare equal, and reconfiguring with
/// identical values yields an equal value. Templates rely on this for
/// structural comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPlaceholder {
    source: LexemeSource,
    explicit: FxHashSet<Grammeme>,
    agreement: Option<Agreement>,
    capitalization: Capitalization,
}

impl BasicPlaceholder {
    pub fn new(source: LexemeSource) -> Self {
        Self {
            source,
            explicit: FxHashSet::default(),
            agreement: None,
            capitalization: Capitalization::Identity,
        }
    }

    pub fn with_capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = capitalization;
        self
    }

    pub fn with_explicit_grammemes(mut self, grammemes: FxHashSet<Grammeme>) -> Self {
        self.explicit = grammemes;
        self
    }

    pub fn with_agreement(mut self, agreement: Agreement) -> Self {
        self.agreement = Some(agreement);
        self
    }

    pub fn source(&self) -> &LexemeSource {
        &self.source
    }

    pub fn agreement(&self) -> Option<&Agreement> {
        self.agreement.as_ref()
    }

    pub fn resolve(&self, context: &mut RenderContext<'_>) -> Result<String, RenderError> {
        resolve_configured(
            context,
            &self.source,
            &self.explicit,
            self.agreement.as_ref(),
            self.capitalization,
        )
    }

    /// Resolve this placeholder alone, outside any template.
    pub fn fill_up(
        &self,
        arguments: &HashMap<String, Lexeme>,
        vocabulary: &HashMap<String, Lexeme>,
    ) -> Result<String, RenderError> {
        let mut context = RenderContext::new(arguments, vocabulary);
        self.resolve(&mut context)
    }
}

/// A lowered `[name]` markup token: one argument reference with no
/// inflection overrides. Capitalization comes from the spelling of the
/// name in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglePartPlaceholder {
    pub argument: String,
    pub capitalization: Capitalization,
}

/// A lowered `[name][...]` markup token: an argument reference plus
/// explicit grammemes and/or an agreement reference from the second part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPartPlaceholder {
    pub argument: String,
    pub grammemes: FxHashSet<Grammeme>,
    pub agreement: Option<Agreement>,
    pub capitalization: Capitalization,
}

/// A resolvable placeholder — one of the three concrete shapes.
///
/// All variants share the same resolution protocol: resolve the source to
/// a lexeme, assemble the required grammeme set from explicit grammemes
/// and agreement, pick the best form, capitalize, and record the chosen
/// form for later agreement lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// Fully explicit configuration, built in code.
    Basic(BasicPlaceholder),
    /// `[name]`.
    SinglePart(SinglePartPlaceholder),
    /// `[name][grammemes-or-agreement]`.
    TwoPart(TwoPartPlaceholder),
}

impl Placeholder {
    /// The name under which this placeholder's chosen form is recorded.
    pub fn identity(&self) -> &str {
        match self {
            Self::Basic(inner) => inner.source().name(),
            Self::SinglePart(inner) => &inner.argument,
            Self::TwoPart(inner) => &inner.argument,
        }
    }

    pub fn agreement(&self) -> Option<&Agreement> {
        match self {
            Self::Basic(inner) => inner.agreement(),
            Self::SinglePart(_) => None,
            Self::TwoPart(inner) => inner.agreement.as_ref(),
        }
    }

    pub fn resolve(&self, context: &mut RenderContext<'_>) -> Result<String, RenderError> {
        match self {
            Self::Basic(inner) => inner.resolve(context),
            Self::SinglePart(inner) => {
                let source = LexemeSource::Argument(inner.argument.clone());
                resolve_configured(
                    context,
                    &source,
                    &FxHashSet::default(),
                    None,
                    inner.capitalization,
                )
            }
            Self::TwoPart(inner) => {
                let source = LexemeSource::Argument(inner.argument.clone());
                resolve_configured(
                    context,
                    &source,
                    &inner.grammemes,
                    inner.agreement.as_ref(),
                    inner.capitalization,
                )
            }
        }
    }
}

/// The shared resolution protocol behind every placeholder shape.
fn resolve_configured(
    context: &mut RenderContext<'_>,
    source: &LexemeSource,
    explicit: &FxHashSet<Grammeme>,
    agreement: Option<&Agreement>,
    capitalization: Capitalization,
) -> Result<String, RenderError> {
    let lexeme = source.resolve(context)?;
    let mut required = explicit.clone();
    if let Some(agreement) = agreement {
        required.extend(agreement.grammemes_to_agree_with(context)?);
    }
    let form = lexeme.best_form(&required)?;
    let text = capitalization.apply(form.text());
    context.record(source.name(), lexeme.effective_grammemes(form));
    Ok(text)
}
