//! Basic example demonstrating the Sketchware API client.
//!
//! Run with:
//! ```
//! SKETCHWARE_API_LOG=1 cargo run --example basic
//! ```

use sketchware_api::{CollectionKind, SketchwareClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> sketchware_api::Result<()> {
    // Request logs are emitted at debug level; RUST_LOG narrows them
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Create client from environment variables
    println!("Creating Sketchware client...");
    let client = SketchwareClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    let version = client.min_sketchware_version().await.into_result()?;
    println!("Minimum app version: {version}");

    // List the newest shared views
    println!("\n--- Recent Views ---");
    let views = client
        .shared()
        .recent(CollectionKind::View, 10, 0)
        .await
        .into_result()?;
    println!("Found {} views", views.len());

    for view in &views {
        println!(
            "  - {} by {} ({} likes)",
            view.display_name().unwrap_or("(unnamed)"),
            view.user_alias,
            view.like_count
        );
    }

    // Open the first one
    if let Some(first) = views.first() {
        println!("\n--- View Details ---");
        client
            .shared()
            .details(CollectionKind::View, first.shared_id)
            .await
            .on_success(|details| {
                println!("View: {}", details.display_name().unwrap_or("(unnamed)"));
                println!("  Summary: {}", details.short_description);
                println!("  Downloads: {}", details.download_count);
            })
            .on_error(|err| eprintln!("  Could not load details: {err}"));

        println!("\n--- Tags ---");
        let tags = client
            .shared()
            .tags(CollectionKind::View, first.shared_id)
            .await
            .into_result()?;
        for tag in &tags {
            println!("  #{}", tag.text);
        }
    }

    println!("\nDone!");
    Ok(())
}
