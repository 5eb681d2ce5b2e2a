// Line protocol for a host UI. Requests on stdin, one per line:
//   TRANSLATE <text>   -> RESULT <json>
//   OPTIONS <json>     -> OK | ERROR <message>
//   EXIT
// stdout carries protocol lines only; logs go to stderr via env_logger.
use enochian_core::persistence::{load_lexicon_json, load_roots_json};
use enochian_core::{TranslateOptions, TranslationEngine};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("--- Enochian bridge starting ---");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let engine = match args.as_slice() {
        [lexicon, roots] => {
            let lexicon = load_lexicon_json(Path::new(lexicon)).unwrap_or_else(|e| {
                log::error!("lexicon not loaded: {e}");
                Vec::new()
            });
            let roots = load_roots_json(Path::new(roots)).unwrap_or_else(|e| {
                log::error!("roots not loaded: {e}");
                Vec::new()
            });
            TranslationEngine::new(lexicon, roots)
        }
        _ => {
            eprintln!("usage: enochian_bridge <lexicon.json> <roots.json>");
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut options = TranslateOptions::default();

    for line in stdin.lock().lines() {
        let input = line?;
        log::debug!("bridge <- {input:?}");
        let (command, payload) = input.split_once(' ').unwrap_or((input.as_str(), ""));

        match command {
            "TRANSLATE" => {
                let result = engine.translate(payload, &options);
                match serde_json::to_string(&result) {
                    Ok(json) => writeln!(stdout, "RESULT {json}")?,
                    Err(e) => writeln!(stdout, "ERROR {e}")?,
                }
            }
            "OPTIONS" => match serde_json::from_str::<TranslateOptions>(payload) {
                Ok(parsed) => {
                    options = parsed;
                    writeln!(stdout, "OK")?;
                }
                Err(e) => writeln!(stdout, "ERROR {e}")?,
            },
            "EXIT" => {
                log::info!("bridge: received EXIT");
                break;
            }
            _ => writeln!(stdout, "ERROR unknown command")?,
        }
        stdout.flush()?;
    }
    log::info!("bridge: shutting down");
    Ok(())
}
