//! folio - book structure and text analysis

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use folio::stats::{
    letter_frequency, ngram_counts, preprocess, remove_stopwords, top_k, word_frequency,
};
use folio::{OutlineMode, read_toc};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Book structure and text analysis", long_about = None)]
#[command(after_help = "EXAMPLES:
    folio outline toc.txt                Print a numbered outline
    folio outline toc.txt --mode plain   Titles only
    folio stats novel.txt --top 10       Frequency report")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a table-of-contents file and print its outline
    Outline {
        /// Table-of-contents text file, one title per line
        #[arg(value_name = "FILE")]
        file: String,

        /// Display format: plain, indented, or indented+numbered
        #[arg(long, default_value = "indented+numbered")]
        mode: String,

        /// Book title for the outline's root line
        #[arg(long, default_value = "")]
        title: String,

        /// Treat chapters as top level, discarding Part lines
        #[arg(long)]
        no_parts: bool,

        /// Emit the section tree as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Compute frequency statistics over a text file
    Stats {
        /// Raw text file
        #[arg(value_name = "FILE")]
        file: String,

        /// How many top words and n-grams to report
        #[arg(long, default_value_t = 20)]
        top: usize,

        /// Remove apostrophes instead of keeping them inside words
        #[arg(long)]
        strip_apostrophes: bool,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Outline {
            file,
            mode,
            title,
            no_parts,
            json,
        } => outline(&file, &mode, &title, !no_parts, json),
        Command::Stats {
            file,
            top,
            strip_apostrophes,
            json,
        } => stats(&file, top, !strip_apostrophes, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn outline(
    file: &str,
    mode: &str,
    title: &str,
    include_parts: bool,
    json: bool,
) -> Result<(), String> {
    let mode: OutlineMode = mode.parse().map_err(|e: folio::Error| e.to_string())?;
    let toc = read_toc(file, title, include_parts).map_err(|e| e.to_string())?;

    if json {
        print_json(&toc)
    } else {
        toc.print(mode).map_err(|e| e.to_string())
    }
}

#[derive(serde::Serialize)]
struct FrequencyReport {
    raw_token_count: usize,
    token_count: usize,
    stopwords_removed: usize,
    unique_words: usize,
    total_letters: usize,
    top_words: Vec<(String, usize)>,
    top_bigrams: Vec<(String, usize)>,
    top_trigrams: Vec<(String, usize)>,
    letters: Vec<(char, usize)>,
}

fn stats(file: &str, top: usize, keep_apostrophes: bool, json: bool) -> Result<(), String> {
    let raw = std::fs::read(file).map_err(|e| e.to_string())?;
    let text = folio::decode_text(&raw);

    let pre = preprocess(&text, keep_apostrophes);
    let (kept, removed) = remove_stopwords(&pre.tokens);
    let (letter_counts, total_letters) = letter_frequency(&pre.text);
    let words = word_frequency(&kept);
    let bigrams = ngram_counts(&kept, 2);
    let trigrams = ngram_counts(&kept, 3);

    let mut letters: Vec<(char, usize)> = ('a'..='z')
        .map(|c| (c, letter_counts.get(&c).copied().unwrap_or(0)))
        .collect();
    letters.retain(|&(_, count)| count > 0);

    let report = FrequencyReport {
        raw_token_count: pre.raw_token_count,
        token_count: pre.token_count,
        stopwords_removed: removed,
        unique_words: words.len(),
        total_letters,
        top_words: top_k(&words, top),
        top_bigrams: top_k(&bigrams, top),
        top_trigrams: top_k(&trigrams, top),
        letters,
    };

    if json {
        return print_json(&report);
    }

    println!("Tokens before cleaning: {}", report.raw_token_count);
    println!("Tokens after cleaning: {}", report.token_count);
    println!("Stopwords removed: {}", report.stopwords_removed);
    println!("Unique words: {}", report.unique_words);
    println!("Total letters: {}", report.total_letters);

    print_counts("Top words", &report.top_words);
    print_counts("Top bigrams", &report.top_bigrams);
    print_counts("Top trigrams", &report.top_trigrams);

    println!("\nLetter frequency:");
    for (letter, count) in &report.letters {
        println!("  {letter}  {count}");
    }

    Ok(())
}

fn print_counts(label: &str, entries: &[(String, usize)]) {
    println!("\n{label}:");
    for (token, count) in entries {
        println!("  {count:>8}  {token}");
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}
