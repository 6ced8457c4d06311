//! `relir` CLI: related-article playground over an exported corpus.
//!
//! The corpus file is a JSON array of articles in the platform's export shape
//! (`_id`, `title`, `subTitle`, `category`, `image`, `createdAt`).

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use relir::document::check_unique_ids;
#[cfg(feature = "cli")]
use relir::tfidf::vectorize;
#[cfg(feature = "cli")]
use relir::tokenize::tokenize;
#[cfg(feature = "cli")]
use relir::{recommend, Document, DEFAULT_TOP_K};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
fn load_corpus(input: &Path) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let corpus: Vec<Document> = serde_json::from_str(&text)?;
    check_unique_ids(&corpus)?;
    Ok(corpus)
}

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(author, version, about = "Related-article ranking CLI", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank articles related to one article and print the top-k.
    Recommend {
        /// Path to a JSON corpus export.
        #[arg(short, long)]
        input: PathBuf,

        /// Id of the article being viewed.
        #[arg(long)]
        query_id: String,

        /// Number of related articles to return.
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        k: usize,
    },

    /// Print the index terms a text normalizes to.
    Tokenize {
        /// Raw text.
        text: String,
    },

    /// Print corpus statistics (documents, vocabulary, most common terms).
    Stats {
        /// Path to a JSON corpus export.
        #[arg(short, long)]
        input: PathBuf,

        /// Number of top terms (by document frequency) to list.
        #[arg(long, default_value_t = 10)]
        top_terms: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "cli")]
    {
        let args = Args::parse();

        match args.command {
            Commands::Recommend { input, query_id, k } => {
                let corpus = load_corpus(&input)?;
                let recs = recommend(&corpus, &query_id, k);
                if recs.is_empty() {
                    println!("no related articles");
                } else {
                    println!("Related to {query_id}:");
                    for rec in recs {
                        println!(
                            "  {} [{}] {} ({}% match)",
                            rec.document.id,
                            rec.document.category,
                            rec.document.title,
                            rec.match_percent()
                        );
                    }
                }
            }
            Commands::Tokenize { text } => {
                for token in tokenize(&text) {
                    println!("{token}");
                }
            }
            Commands::Stats { input, top_terms } => {
                let corpus = load_corpus(&input)?;
                let model = vectorize(&corpus);
                println!("documents: {}", model.num_docs());
                println!("vocabulary: {} terms", model.vocabulary().len());

                let mut terms: Vec<(&str, u32)> = model
                    .vocabulary()
                    .iter()
                    .map(|t| (t.as_str(), model.doc_frequency(t)))
                    .collect();
                // Deterministic: df desc, then term asc.
                terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                terms.truncate(top_terms);
                for (term, df) in terms {
                    println!("  {term}: df={df}");
                }
            }
        }
    }

    #[cfg(not(feature = "cli"))]
    println!("CLI feature is disabled. Build with --features cli to enable.");

    Ok(())
}
