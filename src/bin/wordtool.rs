use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use thesaurus_engine::{browse, db::WordDatabase, matcher, WordView, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(name = "wordtool", about = "Thesaurus database diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a query to the closest known word (fuzzy match)
    Lookup {
        /// Path to the word database JSON file
        db_file: String,
        /// Query text (may be misspelled)
        query: String,
        /// Minimum similarity score (1-100)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List words starting with a prefix
    Prefix {
        /// Path to the word database JSON file
        db_file: String,
        /// Prefix to search for (case-insensitive)
        prefix: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Browse words grouped by first letter
    Browse {
        /// Path to the word database JSON file
        db_file: String,
        /// Show only this letter's bucket
        letter: Option<char>,
    },

    /// Show database statistics
    Info {
        /// Path to the word database JSON file
        db_file: String,
    },
}

fn load_db(path: &str) -> WordDatabase {
    match WordDatabase::load(Path::new(path)) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Lookup {
            db_file,
            query,
            threshold,
            json,
        } => {
            let db = load_db(&db_file);
            match matcher::resolve(&query, &db, threshold) {
                Some(record) => {
                    let view = WordView::from_record(record);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&view).unwrap());
                    } else {
                        print!("{}", view.render_plain());
                    }
                }
                None => {
                    if json {
                        println!("{{\"result\":\"not_found\"}}");
                    } else {
                        println!("no match for '{}' at threshold {threshold}", query.trim());
                    }
                    process::exit(2);
                }
            }
        }

        Command::Prefix {
            db_file,
            prefix,
            json,
        } => {
            let db = load_db(&db_file);
            let records = browse::find_by_prefix(&prefix, &db);
            if json {
                let views: Vec<WordView> = records.iter().map(|r| WordView::from_record(r)).collect();
                println!("{}", serde_json::to_string_pretty(&views).unwrap());
            } else {
                for record in &records {
                    println!("{}  ({})", record.word, record.part_of_speech);
                }
                println!("{} word(s)", records.len());
            }
        }

        Command::Browse { db_file, letter } => {
            let db = load_db(&db_file);
            let groups = browse::group_by_first_letter(&db);
            let filter = letter.map(|l| l.to_uppercase().next().unwrap_or(l));
            for (key, records) in &groups {
                if filter.is_some_and(|l| l != *key) {
                    continue;
                }
                println!("{key} ({} words)", records.len());
                for record in records {
                    println!("  {}", record.word);
                }
            }
        }

        Command::Info { db_file } => {
            let db = load_db(&db_file);
            let stats = db.stats();
            println!("words:   {}", stats.total_words);
            println!("letters: {}", stats.letters_covered);
            println!("parts of speech:");
            for (pos, count) in &stats.part_of_speech {
                println!("  {pos}: {count}");
            }
        }
    }
}
