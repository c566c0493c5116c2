//! Sketchware CLI binary.
//!
//! A command-line interface for browsing the Sketchware sharing service.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use sketchware_api::cli::{Cli, Command};
use sketchware_api::output::PrettyPrint;
use sketchware_api::{
    ClientConfig, CollectionKind, RowWindow, SharedComment, SharedItem, SharedTag,
    SketchwareClient,
};
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ClientConfig::default()
        .with_base_url(cli.base_url.clone())
        .with_logging(cli.verbose);

    let client = match SketchwareClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check --base-url or SKETCHWARE_API_URL");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &SketchwareClient, cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    match cli.command {
        Command::Version => {
            let version = client.min_sketchware_version().await.into_result()?;
            println!("{version}");
        }
        Command::List {
            kind,
            sort,
            count,
            start,
        } => {
            let kind = CollectionKind::from(kind);
            let items = client
                .shared()
                .list(kind, sort.into(), &RowWindow::new(count, start))
                .await
                .into_result()?;
            output_list(&items, json, |i| SharedItemRow::from(i))?;
        }
        Command::Search {
            kind,
            tag,
            count,
            start,
        } => {
            let items = client
                .shared()
                .search_by_tag(kind.into(), count, start, &tag)
                .await
                .into_result()?;
            output_list(&items, json, |i| SharedItemRow::from(i))?;
        }
        Command::Details { kind, shared_id } => {
            let details = client
                .shared()
                .details(kind.into(), shared_id)
                .await
                .into_result()?;
            output_single(&details, json)?;
        }
        Command::Comments { kind, shared_id } => {
            let comments = client
                .shared()
                .comments(kind.into(), shared_id)
                .await
                .into_result()?;
            output_list(&comments, json, |c| CommentRow::from(c))?;
        }
        Command::Tags { kind, shared_id } => {
            let tags = match (kind, shared_id) {
                (Some(kind), Some(id)) => client.shared().tags(kind.into(), id).await,
                (None, None) => client.shared().all_tags().await,
                _ => {
                    return Err(sketchware_api::SketchwareError::Config(
                        "tags needs both a kind and a shared id, or neither".to_string(),
                    )
                    .into())
                }
            }
            .into_result()?;
            output_list(&tags, json, |t| TagRow::from(t))?;
        }
        Command::Download {
            kind,
            shared_id,
            file_name,
            output,
        } => {
            let bytes = client
                .shared()
                .file(kind.into(), shared_id, &file_name)
                .await
                .into_result()?;
            let path = output.unwrap_or_else(|| file_name.clone().into());
            std::fs::write(&path, &bytes).map_err(|e| {
                std::io::Error::new(e.kind(), format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        Command::Export { url_id } => {
            let projects = client
                .projects()
                .exported_project(url_id)
                .await
                .into_result()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                for project in &projects {
                    println!("{}\n", project.pretty_print());
                }
            }
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> sketchware_api::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> sketchware_api::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} items", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct SharedItemRow {
    id: i64,
    name: String,
    author: String,
    downloads: i64,
    likes: i64,
    comments: i64,
}

impl From<&SharedItem> for SharedItemRow {
    fn from(item: &SharedItem) -> Self {
        Self {
            id: item.shared_id,
            name: item.display_name().unwrap_or_default().to_string(),
            author: item.user_alias.clone(),
            downloads: item.download_count,
            likes: item.like_count,
            comments: item.comment_count,
        }
    }
}

#[derive(Tabled)]
struct CommentRow {
    id: i64,
    author: String,
    date: String,
    comment: String,
}

impl From<&SharedComment> for CommentRow {
    fn from(c: &SharedComment) -> Self {
        Self {
            id: c.comment_id,
            author: c.user_alias.clone(),
            date: c.register_date.clone(),
            comment: c.comment.clone(),
        }
    }
}

#[derive(Tabled)]
struct TagRow {
    id: i64,
    tag: String,
}

impl From<&SharedTag> for TagRow {
    fn from(t: &SharedTag) -> Self {
        Self {
            id: t.id,
            tag: t.text.clone(),
        }
    }
}
