/// Name→template registry with fail-fast lookup.

use std::collections::HashMap;
use thiserror::Error;

use crate::core::template::Template;

#[derive(Debug, Error)]
pub enum TemplatuaryError {
    #[error("no template with id `{0}`")]
    UnknownTemplateId(String),
}

/// All templates known to the engine, keyed by identifier.
///
/// Immutable after construction; construction is performed by whatever
/// loads the application's template bundles.
#[derive(Debug, Clone, Default)]
pub struct Templatuary {
    templates: HashMap<String, Template>,
}

impl Templatuary {
    pub fn new(templates: HashMap<String, Template>) -> Self {
        Self { templates }
    }

    pub fn has_template(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn template(&self, id: &str) -> Result<&Template, TemplatuaryError> {
        self.templates
            .get(id)
            .ok_or_else(|| TemplatuaryError::UnknownTemplateId(id.to_string()))
    }
}
