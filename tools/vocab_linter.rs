/// Vocab Linter — validates vocabulary RON files against a language.
///
/// Usage: vocab_linter <vocab.ron | dir> [--language <english|russian>]

use inflectible::core::vocabulary::Vocabulary;
use inflectible::languages::{English, Language, Russian};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: vocab_linter <vocab.ron | dir> [--language <english|russian>]");
        process::exit(0);
    }

    let vocab_path = &args[1];
    let mut language_name = "english".to_string();

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--language" && i + 1 < args.len() {
            i += 1;
            language_name = args[i].to_lowercase();
        }
        i += 1;
    }

    let language: Box<dyn Language> = match language_name.as_str() {
        "english" => Box::new(English::new()),
        "russian" => Box::new(Russian::new()),
        other => {
            eprintln!("ERROR: Unknown language '{}'", other);
            process::exit(1);
        }
    };

    let mut vocabulary = Vocabulary::default();
    let path = Path::new(vocab_path);

    if path.is_file() {
        load_file(path, language.as_ref(), &mut vocabulary);
    } else if path.is_dir() {
        load_dir(path, language.as_ref(), &mut vocabulary);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", vocab_path);
        process::exit(1);
    }

    println!(
        "Loaded {} lexemes for {}",
        vocabulary.lexemes.len(),
        language.name()
    );

    let mut problems = 0;
    let mut names: Vec<&String> = vocabulary.lexemes.keys().collect();
    names.sort();
    for name in names {
        let lexeme = &vocabulary.lexemes[name];
        if lexeme.forms().is_empty() {
            eprintln!("ERROR: lexeme '{}' has no word forms", name);
            problems += 1;
            continue;
        }
        for (i, form) in lexeme.forms().iter().enumerate() {
            for earlier in &lexeme.forms()[..i] {
                if earlier.grammemes() == form.grammemes() {
                    eprintln!(
                        "WARNING: lexeme '{}' has forms '{}' and '{}' with identical grammemes; the earlier one always wins",
                        name,
                        earlier.text(),
                        form.text()
                    );
                }
            }
        }
    }

    if problems > 0 {
        eprintln!("{} problem(s) found", problems);
        process::exit(1);
    }
    println!("OK");
}

fn load_file(path: &Path, language: &dyn Language, vocabulary: &mut Vocabulary) {
    match Vocabulary::load_from_ron(path, language.grammar()) {
        Ok(loaded) => vocabulary.merge(loaded),
        Err(e) => {
            eprintln!("ERROR: Failed to load '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn load_dir(dir: &Path, language: &dyn Language, vocabulary: &mut Vocabulary) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("ERROR: Failed to read '{}': {}", dir.display(), e);
            process::exit(1);
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            load_file(&path, language, vocabulary);
        }
    }
}
