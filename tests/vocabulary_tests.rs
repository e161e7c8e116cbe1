/// Vocabulary loading integration tests against the RON fixtures.

use std::collections::HashMap;
use std::path::Path;

use inflectible::core::template::{Template, TemplateNode};
use inflectible::core::vocabulary::{Vocabulary, VocabularyError};
use inflectible::languages::{english, English, Language, Russian};

#[test]
fn english_fixture_loads() {
    let language = English::new();
    let vocabulary = Vocabulary::load_from_ron(
        Path::new("tests/fixtures/english_animals.ron"),
        language.grammar(),
    )
    .unwrap();
    assert_eq!(vocabulary.lexemes.len(), 3);
    assert!(vocabulary.lexemes.contains_key("bear"));
    assert!(vocabulary.lexemes.contains_key("wolf"));

    let eat = &vocabulary.lexemes["eat"];
    assert_eq!(eat.forms().len(), 3);
    assert!(eat.forms()[2].grammemes().contains(&english::GER));
}

#[test]
fn loaded_lexemes_render_through_a_template() {
    let language = English::new();
    let vocabulary = Vocabulary::load_from_ron(
        Path::new("tests/fixtures/english_animals.ron"),
        language.grammar(),
    )
    .unwrap();

    let template = Template::from_nodes(
        language.grammar(),
        vec!["actor".to_string(), "action".to_string()],
        [
            TemplateNode::Text("The ".to_string()),
            TemplateNode::TwoPart {
                name: "actor".to_string(),
                grammemes: vec!["Plur".to_string()],
                agreement: None,
            },
            TemplateNode::Text(" ".to_string()),
            TemplateNode::TwoPart {
                name: "action".to_string(),
                grammemes: Vec::new(),
                agreement: Some("actor".to_string()),
            },
            TemplateNode::Text(".".to_string()),
        ],
    )
    .unwrap();

    let mut arguments = HashMap::new();
    arguments.insert("actor".to_string(), vocabulary.lexemes["wolf"].clone());
    arguments.insert("action".to_string(), vocabulary.lexemes["eat"].clone());
    assert_eq!(
        template.fill_up(&arguments, &HashMap::new()).unwrap(),
        "The wolves eat."
    );
}

#[test]
fn russian_fixture_inflects_cases() {
    let language = Russian::new();
    let vocabulary = Vocabulary::load_from_ron(
        Path::new("tests/fixtures/russian_hunt.ron"),
        language.grammar(),
    )
    .unwrap();

    let template = Template::from_nodes(
        language.grammar(),
        vec!["prey".to_string()],
        [
            TemplateNode::Text("Охотник идёт за ".to_string()),
            TemplateNode::TwoPart {
                name: "prey".to_string(),
                grammemes: vec!["Ins".to_string(), "Sing".to_string()],
                agreement: None,
            },
            TemplateNode::Text(".".to_string()),
        ],
    )
    .unwrap();

    let mut arguments = HashMap::new();
    arguments.insert("prey".to_string(), vocabulary.lexemes["волк"].clone());
    assert_eq!(
        template.fill_up(&arguments, &HashMap::new()).unwrap(),
        "Охотник идёт за волком."
    );
}

#[test]
fn missing_file_reports_io_error() {
    let language = English::new();
    let result = Vocabulary::load_from_ron(
        Path::new("tests/fixtures/no_such_file.ron"),
        language.grammar(),
    );
    assert!(matches!(result, Err(VocabularyError::Io(_))));
}

#[test]
fn fixture_merge_overrides_by_name() {
    let language = English::new();
    let mut base = Vocabulary::load_from_ron(
        Path::new("tests/fixtures/english_animals.ron"),
        language.grammar(),
    )
    .unwrap();
    let overrides = Vocabulary::parse_ron(
        r#"{ "bear": (forms: [(text: "grizzly")]) }"#,
        language.grammar(),
    )
    .unwrap();
    base.merge(overrides);
    assert_eq!(base.lexemes["bear"].forms()[0].text(), "grizzly");
    assert_eq!(base.lexemes.len(), 3);
}
