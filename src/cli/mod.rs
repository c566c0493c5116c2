//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the sketchware binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::{CollectionKind, SortMode};

/// Sketchware sharing service command-line interface.
#[derive(Parser, Debug)]
#[command(name = "sketchware", about = "Sketchware sharing service CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the service.
    #[arg(
        long,
        global = true,
        env = "SKETCHWARE_API_URL",
        default_value = crate::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Log every request and response.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the minimum app version the service accepts.
    Version,

    /// List shared items of a collection.
    List {
        /// The collection to list.
        kind: Kind,

        /// Listing order.
        #[arg(long, value_enum, default_value_t = Sort::Recent)]
        sort: Sort,

        /// Number of items to load.
        #[arg(long, default_value_t = 20)]
        count: u32,

        /// Index of the first item.
        #[arg(long, default_value_t = 0)]
        start: u32,
    },

    /// Search a collection by tag.
    Search {
        /// The collection to search.
        kind: Kind,

        /// Tag text to match.
        tag: String,

        /// Number of items to load.
        #[arg(long, default_value_t = 20)]
        count: u32,

        /// Index of the first item.
        #[arg(long, default_value_t = 0)]
        start: u32,
    },

    /// Show the details of one shared item.
    Details {
        kind: Kind,
        shared_id: i64,
    },

    /// List the comments on one shared item.
    Comments {
        kind: Kind,
        shared_id: i64,
    },

    /// List tags, either of one shared item or all known tags.
    Tags {
        kind: Option<Kind>,
        shared_id: Option<i64>,
    },

    /// Download the file of a shared item.
    Download {
        kind: Kind,
        shared_id: i64,
        file_name: String,

        /// Where to write the file (defaults to the file name).
        #[arg(long, short)]
        output: Option<std::path::PathBuf>,
    },

    /// Show an exported project.
    Export {
        /// Share URL id of the export.
        url_id: i64,
    },
}

/// Collection kinds accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Shared views.
    #[value(alias = "views")]
    View,
    /// Shared blocks.
    #[value(alias = "blocks")]
    Block,
    /// Shared moreblocks.
    #[value(alias = "moreblocks")]
    Moreblock,
}

impl From<Kind> for CollectionKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::View => CollectionKind::View,
            Kind::Block => CollectionKind::Block,
            Kind::Moreblock => CollectionKind::MoreBlock,
        }
    }
}

/// Listing orders accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sort {
    Recent,
    #[value(alias = "likes")]
    Liked,
    #[value(alias = "downloads")]
    Downloaded,
}

impl From<Sort> for SortMode {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Recent => SortMode::Recent,
            Sort::Liked => SortMode::MostLiked,
            Sort::Downloaded => SortMode::MostDownloaded,
        }
    }
}
