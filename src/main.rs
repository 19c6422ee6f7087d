use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use blogsmith::blog::blocks::{BlogPost, NormalizeRequest};
use blogsmith::config::{self, Config};
use blogsmith::output;
use blogsmith::pipeline;
use blogsmith::sources::documents::GenerateRequest;
use blogsmith::sources::images::PlaceholderImages;
use blogsmith::sources::retrieval::TemplateEngine;
use blogsmith::store::{BlogStore, StoredPost};

/// Blogsmith: turn retrieval-augmented answers into render-ready blog posts.
///
/// Reads JSON from a file or stdin and writes the normalized post as JSON
/// to stdout. Logs go to stderr.
#[derive(Parser)]
#[command(name = "blogsmith", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a raw answer: {topic, rawAnswer, featuredImageUrl, contentImageUrl}
    Normalize {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Generate a post from scraped content: {topic, contents: [...]}
    Generate {
        #[command(flatten)]
        io: IoArgs,
    },

    /// List saved posts
    List {
        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one saved post by id
    Show {
        /// The post id (a UUID printed by `--save`)
        id: String,

        /// Show a colored preview instead of JSON
        #[arg(long)]
        preview: bool,
    },
}

#[derive(clap::Args)]
struct IoArgs {
    /// Read the request from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Show a colored preview instead of JSON
    #[arg(long)]
    preview: bool,

    /// Save the post under the blog directory and print the saved record
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr; stdout carries the post
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blogsmith=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { io } => {
            let raw = read_input(io.input.as_deref())?;
            let request: NormalizeRequest =
                serde_json::from_str(&raw).context("Invalid normalize request JSON")?;
            config::require_topic(&request.topic)?;

            let post = pipeline::normalize::normalize_request(&request)
                .context("Failed to normalize answer")?;
            emit(&request.topic, post, &io)?;
        }

        Commands::Generate { io } => {
            let config = Config::load()?;
            let raw = read_input(io.input.as_deref())?;
            let request: GenerateRequest =
                serde_json::from_str(&raw).context("Invalid generate request JSON")?;
            info!(
                topic = %request.topic,
                articles = request.contents.len(),
                "Generating blog post"
            );

            let images = PlaceholderImages::new(&config);
            let post = pipeline::generate::run(&request, &TemplateEngine, &images, &config)?;
            emit(&request.topic, post, &io)?;
        }

        Commands::List { json } => {
            let config = Config::load()?;
            let records = BlogStore::new(&config.blog_dir).list()?;
            if json {
                let out = serde_json::to_string_pretty(&records)
                    .context("Failed to serialize saved posts")?;
                println!("{out}");
            } else {
                output::terminal::display_record_list(&records);
            }
        }

        Commands::Show { id, preview } => {
            let config = Config::load()?;
            let Some(record) = BlogStore::new(&config.blog_dir).get(&id)? else {
                anyhow::bail!("Blog not found: {id}\nRun `blogsmith list` to see saved posts.");
            };
            if preview {
                output::terminal::display_record(&record);
            } else {
                let out = serde_json::to_string_pretty(&record)
                    .context("Failed to serialize saved post")?;
                println!("{out}");
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

fn emit(topic: &str, post: BlogPost, io: &IoArgs) -> Result<()> {
    if !io.save {
        if io.preview {
            output::terminal::display_post(&post);
        } else {
            println!("{}", output::to_json(&post, io.pretty)?);
        }
        return Ok(());
    }

    let config = Config::load()?;
    let record = StoredPost::new(topic, post);
    let path = BlogStore::new(&config.blog_dir).save(&record)?;
    info!(id = %record.id, path = %path.display(), "Blog post saved");

    if io.preview {
        output::terminal::display_record(&record);
    } else {
        let out = if io.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        println!("{}", out.context("Failed to serialize saved post")?);
    }
    Ok(())
}
