use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::Read as _;

use episeek::{build_corpus, search, suggest, tokenize, Corpus, Record};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            data,
            json,
            limit,
        } => run_search(&query, &data, json, limit),
        Commands::Suggest { query, data, limit } => {
            run_suggest(query.as_deref().unwrap_or(""), &data, limit)
        }
        Commands::Vocab { data } => run_vocab(&data),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Load the catalog and index it. `-` reads the JSON from stdin.
fn load_corpus(data: &str) -> Result<Corpus, Box<dyn Error>> {
    let raw = if data == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(data)?
    };
    let records: Vec<Record> = serde_json::from_str(&raw)?;
    Ok(build_corpus(records))
}

fn run_search(
    query: &str,
    data: &str,
    json: bool,
    limit: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let corpus = load_corpus(data)?;
    let tokens = tokenize(query);
    if tokens.is_empty() {
        // All-delimiter query: no search active, nothing to print.
        return Ok(());
    }

    let mut results = search(&tokens, &corpus.records);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for record in &results {
            print_record(record);
        }
    }
    Ok(())
}

fn run_suggest(query: &str, data: &str, limit: Option<usize>) -> Result<(), Box<dyn Error>> {
    let corpus = load_corpus(data)?;
    let mut options = suggest(&tokenize(query), &corpus.vocabulary);
    if let Some(limit) = limit {
        options.truncate(limit);
    }
    for option in &options {
        println!("{}", option);
    }
    Ok(())
}

fn run_vocab(data: &str) -> Result<(), Box<dyn Error>> {
    let corpus = load_corpus(data)?;
    for entry in &corpus.vocabulary {
        println!("{}", entry);
    }
    Ok(())
}

/// One result as a terminal line pair, mirroring the catalog card layout:
/// `serial. title  [category season]`, then the character/keyword line.
fn print_record(record: &Record) {
    let badge = format!("[{} {}]", record.category, record.season);
    let tags = record
        .characters
        .iter()
        .chain(record.keywords.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    if atty::is(atty::Stream::Stdout) {
        println!(
            "{}. {}  \x1b[35m{}\x1b[0m",
            record.serial, record.title, badge
        );
        if !tags.is_empty() {
            println!("   \x1b[2m{}\x1b[0m", tags);
        }
    } else {
        println!("{}. {}  {}", record.serial, record.title, badge);
        if !tags.is_empty() {
            println!("   {}", tags);
        }
    }
}
