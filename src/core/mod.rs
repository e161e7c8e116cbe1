pub mod capitalization;
pub mod context;
pub mod placeholder;
pub mod template;
pub mod templatuary;
pub mod vocabulary;
