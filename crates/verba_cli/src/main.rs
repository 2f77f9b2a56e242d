//! Command-line front-end: analyze Latin words and print JSON records.

use std::error::Error;
use std::io::Read;

use clap::Parser;
use log::info;

use verba_language::{Analyzer, Direction, Lexicon};

#[derive(Parser)]
#[command(name = "verba", version, about = "Latin morphological analyzer")]
struct Args {
    /// Words to analyze; reads whitespace-separated words from stdin when
    /// none are given.
    words: Vec<String>,

    /// Emit raw lexicon codes instead of translated grammar terms.
    #[arg(long)]
    raw: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let lexicon = Lexicon::shared();
    info!(
        "lexicon ready: {} entries, {} stems, {} inflections",
        lexicon.entries().len(),
        lexicon.stems().len(),
        lexicon.inflections().len()
    );
    let analyzer = Analyzer::new(lexicon);

    let words = if args.words.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.split_whitespace().map(str::to_string).collect()
    } else {
        args.words
    };

    for word in &words {
        let result = analyzer.parse_with(word, Direction::LatinToEnglish, !args.raw)?;
        let json = if args.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{json}");
    }

    Ok(())
}
