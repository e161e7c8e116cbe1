/// Bear Hunt example — inflected narration for a tiny hunting scene.
///
/// Builds an English vocabulary, registers a few templates, and renders
/// them with randomly chosen actors so every run of the scene stays
/// grammatical: singular actors take "eats", plural actors take "eat".
///
/// Run with: cargo run --example bear_hunt

use inflectible::core::template::{Template, TemplateNode};
use inflectible::core::templatuary::Templatuary;
use inflectible::core::vocabulary::Vocabulary;
use inflectible::languages::{English, Language};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

const VOCABULARY: &str = r#"{
    "bear": (
        persistent: ["III"],
        forms: [
            (text: "bear", grammemes: ["Sing"]),
            (text: "bears", grammemes: ["Plur"]),
        ],
    ),
    "wolf": (
        persistent: ["III"],
        forms: [
            (text: "wolf", grammemes: ["Sing"]),
            (text: "wolves", grammemes: ["Plur"]),
        ],
    ),
    "hunter": (
        persistent: ["III"],
        forms: [
            (text: "hunter", grammemes: ["Sing"]),
            (text: "hunters", grammemes: ["Plur"]),
        ],
    ),
    "eat": (
        forms: [
            (text: "eat"),
            (text: "eats", grammemes: ["III", "Sing"]),
        ],
    ),
    "stalk": (
        forms: [
            (text: "stalk"),
            (text: "stalks", grammemes: ["III", "Sing"]),
        ],
    ),
}"#;

fn main() {
    let english = English::new();
    let vocabulary = Vocabulary::parse_ron(VOCABULARY, english.grammar())
        .expect("Failed to parse demo vocabulary");

    // --- Register the scene's templates ---
    let mut templates = HashMap::new();
    templates.insert(
        "hunt.act".to_string(),
        Template::from_nodes(
            english.grammar(),
            vec!["actor".to_string(), "action".to_string()],
            [
                TemplateNode::TwoPart {
                    name: "Actor".to_string(),
                    grammemes: vec!["Sing".to_string()],
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
        .expect("Failed to build hunt.act"),
    );
    templates.insert(
        "hunt.pack".to_string(),
        Template::from_nodes(
            english.grammar(),
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
                TemplateNode::Text(" tonight.".to_string()),
            ],
        )
        .expect("Failed to build hunt.pack"),
    );
    let templatuary = Templatuary::new(templates);

    // --- Narrate a few beats with random casts ---
    let mut rng = StdRng::seed_from_u64(2026);
    let actors = ["bear", "wolf", "hunter"];
    let actions = ["eat", "stalk"];

    for beat in 0..4 {
        let actor = actors.choose(&mut rng).unwrap();
        let action = actions.choose(&mut rng).unwrap();

        let mut arguments = HashMap::new();
        arguments.insert("actor".to_string(), vocabulary.lexemes[*actor].clone());
        arguments.insert("action".to_string(), vocabulary.lexemes[*action].clone());

        let id = if beat % 2 == 0 { "hunt.act" } else { "hunt.pack" };
        let template = templatuary.template(id).expect("template registered above");
        let line = template
            .fill_up(&arguments, &vocabulary.lexemes)
            .expect("demo vocabulary covers all placeholders");
        println!("{}", line);
    }
}
