/// Capitalization policies applied to a word form after it is chosen.
///
/// Matching and agreement operate on vocabulary spelling; capitalization
/// is strictly a final text transform.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Capitalization {
    /// Leave the text as spelled in the vocabulary.
    #[default]
    Identity,
    /// Uppercase the first character.
    Capitalize,
    /// Uppercase every character.
    AllCaps,
}

impl Capitalization {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Identity => text.to_string(),
            Self::Capitalize => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(head) => head.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Self::AllCaps => text.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_text_alone() {
        assert_eq!(Capitalization::Identity.apply("bear"), "bear");
    }

    #[test]
    fn capitalize_uppercases_first_character() {
        assert_eq!(Capitalization::Capitalize.apply("bear"), "Bear");
        assert_eq!(Capitalization::Capitalize.apply("Bear"), "Bear");
    }

    #[test]
    fn capitalize_is_codepoint_aware() {
        assert_eq!(Capitalization::Capitalize.apply("волк"), "Волк");
        // 'ß' uppercases to a two-character expansion.
        assert_eq!(Capitalization::Capitalize.apply("ßar"), "SSar");
    }

    #[test]
    fn all_caps_uppercases_everything() {
        assert_eq!(Capitalization::AllCaps.apply("bear"), "BEAR");
        assert_eq!(Capitalization::AllCaps.apply("волк"), "ВОЛК");
    }

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(Capitalization::Capitalize.apply(""), "");
        assert_eq!(Capitalization::AllCaps.apply(""), "");
    }
}
