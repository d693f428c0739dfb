use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use searchlite_core::{IndexConfig, Indexer, QueryEngine};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: String,
    content: String,
}

#[derive(Parser)]
#[command(name = "searchlite")]
#[command(about = "In-memory TF-IDF search over local documents", long_about = None)]
struct Cli {
    /// Input path: a file or a directory of .txt/.json/.jsonl documents
    #[arg(long)]
    input: String,
    /// Compare terms byte-for-byte instead of folding to lowercase
    #[arg(long, default_value_t = false)]
    case_sensitive: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a ranked query with pagination
    Query {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Suggest indexed terms for a prefix
    Suggest {
        prefix: String,
        #[arg(long, default_value_t = 5)]
        max: usize,
    },
    /// Print index and engine statistics
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut indexer = Indexer::with_config(IndexConfig { case_sensitive: cli.case_sensitive });
    load_documents(Path::new(&cli.input), &mut indexer)?;
    let mut engine = QueryEngine::new(indexer.into_shared());

    match cli.command {
        Commands::Query { query, page, page_size } => {
            let response = engine.search(&query, page, page_size);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Suggest { prefix, max } => {
            let suggestions = engine.suggestions(&prefix, max);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&engine.stats())?);
        }
    }
    Ok(())
}

fn load_documents(input: &Path, indexer: &mut Indexer) -> Result<()> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            if entry.path().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
    } else {
        files.push(input.to_path_buf());
    }

    let mut loaded = 0usize;
    for file in files {
        match file.extension().and_then(|s| s.to_str()) {
            Some("jsonl") => loaded += load_jsonl(&file, indexer)?,
            Some("json") => loaded += load_json(&file, indexer)?,
            Some("txt") => {
                let id = file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("doc")
                    .to_string();
                let content = std::fs::read_to_string(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                indexer.add_document(id, content);
                loaded += 1;
            }
            _ => {}
        }
    }
    tracing::info!(loaded, "documents indexed");
    Ok(())
}

fn load_jsonl(file: &Path, indexer: &mut Indexer) -> Result<usize> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let mut loaded = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("parsing record in {}", file.display()))?;
        indexer.add_document(doc.id, doc.content);
        loaded += 1;
    }
    Ok(loaded)
}

fn load_json(file: &Path, indexer: &mut Indexer) -> Result<usize> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))?;
    let mut loaded = 0;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let doc: InputDoc = serde_json::from_value(v)?;
                indexer.add_document(doc.id, doc.content);
                loaded += 1;
            }
        }
        serde_json::Value::Object(_) => {
            let doc: InputDoc = serde_json::from_value(json)?;
            indexer.add_document(doc.id, doc.content);
            loaded += 1;
        }
        _ => {}
    }
    Ok(loaded)
}
