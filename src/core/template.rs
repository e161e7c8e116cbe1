/// Templates — ordered fragments built once from parsed markup, rendered
/// many times against per-call arguments.

use rustc_hash::FxHashSet;
use std::collections::HashMap;
use thiserror::Error;

use crate::core::capitalization::Capitalization;
use crate::core::context::RenderContext;
use crate::core::placeholder::{
    Agreement, Placeholder, RenderError, SinglePartPlaceholder, TwoPartPlaceholder,
};
use crate::schema::grammar::{Grammar, GrammarError};
use crate::schema::lexeme::Lexeme;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("placeholder {index} agrees with `{name}` before any placeholder resolves it")]
    ForwardAgreementReference { index: usize, name: String },
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// One node of the external markup parser's output, in document order.
///
/// The engine does not parse raw text; whatever parser the application
/// uses hands over a sequence of these nodes per template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// Raw text between placeholders, emitted verbatim.
    Text(String),
    /// A `[name]` token.
    SinglePart { name: String },
    /// A `[name][...]` token: grammeme names and/or an agreement
    /// reference from the second bracket.
    TwoPart {
        name: String,
        grammemes: Vec<String>,
        agreement: Option<String>,
    },
}

/// A template fragment: literal text or a resolvable placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Placeholder(Placeholder),
}

/// An immutable, reusable text template.
///
/// Built once (via [`TemplateBuilder`] or [`Template::from_nodes`]) and
/// rendered any number of times; rendering never mutates the template, so
/// concurrent renders with different arguments cannot interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    declared_arguments: Vec<String>,
    fragments: Vec<Fragment>,
}

impl Template {
    /// Lower a parsed markup body into a template.
    ///
    /// This is the explicit traversal over the parser's node sequence:
    /// grammeme names resolve through `grammar` (failing fast on unknown
    /// ones), and a leading-uppercase placeholder name (`[Actor]`) means
    /// "capitalize the output" and refers to the argument `actor`.
    pub fn from_nodes(
        grammar: &Grammar,
        declared_arguments: Vec<String>,
        nodes: impl IntoIterator<Item = TemplateNode>,
    ) -> Result<Template, TemplateError> {
        let mut builder = TemplateBuilder::new(declared_arguments);
        for node in nodes {
            match node {
                TemplateNode::Text(text) => {
                    builder.push_text(text);
                }
                TemplateNode::SinglePart { name } => {
                    let (argument, capitalization) = normalize_name(&name);
                    builder.push_placeholder(Placeholder::SinglePart(SinglePartPlaceholder {
                        argument,
                        capitalization,
                    }));
                }
                TemplateNode::TwoPart {
                    name,
                    grammemes,
                    agreement,
                } => {
                    let (argument, capitalization) = normalize_name(&name);
                    let mut required = FxHashSet::default();
                    for grammeme_name in &grammemes {
                        required.insert(grammar.grammeme_by_name(grammeme_name)?);
                    }
                    builder.push_placeholder(Placeholder::TwoPart(TwoPartPlaceholder {
                        argument,
                        grammemes: required,
                        agreement: agreement.map(Agreement::Argument),
                        capitalization,
                    }));
                }
            }
        }
        builder.build()
    }

    /// Argument names declared in the template header, in markup order.
    pub fn declared_arguments(&self) -> &[String] {
        &self.declared_arguments
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Render this template: literal fragments are appended verbatim,
    /// placeholders are resolved against `arguments` and `vocabulary`, in
    /// declaration order.
    pub fn fill_up(
        &self,
        arguments: &HashMap<String, Lexeme>,
        vocabulary: &HashMap<String, Lexeme>,
    ) -> Result<String, RenderError> {
        let mut context = RenderContext::new(arguments, vocabulary);
        let mut output = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => output.push_str(text),
                Fragment::Placeholder(placeholder) => {
                    output.push_str(&placeholder.resolve(&mut context)?);
                }
            }
        }
        Ok(output)
    }
}

/// Accumulates fragments and validates agreement ordering at `build`.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    declared_arguments: Vec<String>,
    fragments: Vec<Fragment>,
}

impl TemplateBuilder {
    pub fn new(declared_arguments: Vec<String>) -> Self {
        Self {
            declared_arguments,
            fragments: Vec::new(),
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::Text(text.into()));
        self
    }

    pub fn push_placeholder(&mut self, placeholder: Placeholder) -> &mut Self {
        self.fragments.push(Fragment::Placeholder(placeholder));
        self
    }

    /// Finalize the template.
    ///
    /// Every agreement must reference a name some earlier placeholder
    /// resolves; anything else would dereference a form that does not
    /// exist yet at render time, so it is rejected here instead.
    pub fn build(self) -> Result<Template, TemplateError> {
        let mut resolved: FxHashSet<&str> = FxHashSet::default();
        for (index, fragment) in self.fragments.iter().enumerate() {
            if let Fragment::Placeholder(placeholder) = fragment {
                if let Some(agreement) = placeholder.agreement() {
                    if !resolved.contains(agreement.target()) {
                        return Err(TemplateError::ForwardAgreementReference {
                            index,
                            name: agreement.target().to_string(),
                        });
                    }
                }
                resolved.insert(placeholder.identity());
            }
        }
        Ok(Template {
            declared_arguments: self.declared_arguments,
            fragments: self.fragments,
        })
    }
}

/// `[Actor]` capitalizes its output and refers to the argument `actor`.
fn normalize_name(name: &str) -> (String, Capitalization) {
    let mut chars = name.chars();
    match chars.next() {
        Some(head) if head.is_uppercase() => {
            let mut lowered: String = head.to_lowercase().collect();
            lowered.push_str(chars.as_str());
            (lowered, Capitalization::Capitalize)
        }
        _ => (name.to_string(), Capitalization::Identity),
    }
}
