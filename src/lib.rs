//! Inflectible — grammatically correct text generation from declarative
//! templates.
//!
//! Placeholders in a template are inflected (capitalized, pluralized,
//! agreed in person/number/case) rather than merely substituted, so game
//! narration and other generated text stays grammatical across whatever
//! arguments the caller supplies at render time.

pub mod core;
pub mod languages;
pub mod schema;
