use crossterm::style::Stylize;
use enochian_core::persistence::{load_lexicon_json, load_roots_json};
use enochian_core::{TranslateOptions, TranslationEngine, TranslationResult};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "usage: enochian <lexicon.json> <roots.json> | enochian --snapshot <tables.bin>";

fn build_engine(args: &[String]) -> Result<TranslationEngine, String> {
    match args {
        [flag, path] if flag == "--snapshot" => {
            TranslationEngine::from_snapshot(Path::new(path)).map_err(|e| e.to_string())
        }
        [lexicon, roots] => {
            let lexicon = load_lexicon_json(Path::new(lexicon)).map_err(|e| e.to_string())?;
            let roots = load_roots_json(Path::new(roots)).map_err(|e| e.to_string())?;
            Ok(TranslationEngine::new(lexicon, roots))
        }
        _ => Err(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let engine = match build_engine(&args) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut options = TranslateOptions::default();
    let mut last: Option<TranslationResult> = None;

    println!("Enochian Translator. Type 'exit' to quit, ':help' for commands.");
    println!("---------------------------------------------------------------");
    prompt();

    for line in stdin().lock().lines() {
        let Ok(input) = line else { break };
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":help" => print_help(),
            ":options" => println!("{options:?}"),
            ":explain" => match &last {
                Some(result) => print_details(result),
                None => println!("Nothing translated yet."),
            },
            s if s.starts_with(":set ") => {
                let parts: Vec<&str> = s.split_whitespace().collect();
                match parts.as_slice() {
                    [_, flag, value] if *value == "on" || *value == "off" => {
                        if options.set(flag, *value == "on") {
                            println!("{flag} = {value}");
                        } else {
                            println!("unknown flag '{flag}'");
                        }
                    }
                    _ => println!("usage: :set <flag> on|off"),
                }
            }
            s if s.starts_with(":save ") => {
                let path = s[":save ".len()..].trim();
                match engine.save_snapshot(Path::new(path)) {
                    Ok(()) => println!("Tables saved to '{path}'"),
                    Err(e) => eprintln!("[ERROR] Could not save tables: {e}"),
                }
            }
            text => {
                let result = engine.translate(text, &options);
                print_result(&result);
                last = Some(result);
            }
        }
        prompt();
    }
    ExitCode::SUCCESS
}

fn prompt() {
    print!("\n> ");
    let _ = stdout().flush();
}

fn print_help() {
    println!("  <text>               translate");
    println!("  :set <flag> on|off   fuzzy, plural, roots, phrases, context");
    println!("  :options             show current options");
    println!("  :explain             construction details of the last translation");
    println!("  :save <file>         write a table snapshot");
    println!("  exit                 quit");
}

fn print_result(result: &TranslationResult) {
    println!("{} {}", "Enochian: ".bold(), result.translation_text.as_str().green());
    println!("{} {}", "Phonetic: ".bold(), result.phonetic_text.as_str().cyan());
    println!("{} {}", "Symbols:  ".bold(), result.symbol_text.as_str().magenta());
    let s = &result.stats;
    println!(
        "direct {} | partial {} | constructed {} | missing {} | total {}",
        s.direct, s.partial, s.constructed, s.missing, s.total
    );
}

fn print_details(result: &TranslationResult) {
    for detail in &result.construction_details {
        println!(
            "  {} -> {} [{:?}] {}",
            detail.original, detail.result, detail.method, detail.explanation
        );
    }
    for (phrase, word) in &result.phrase_matches {
        println!("  phrase \"{phrase}\" -> {word}");
    }
}
