//! Command-line interface, parsed with clap.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MovieHub - movie catalogue server
#[derive(Parser)]
#[command(name = "moviehub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (default)
    Serve,

    /// List movies, newest first
    #[command(alias = "ls", alias = "l")]
    List {
        /// Only movies in this category
        #[arg(long, conflicts_with = "trending")]
        category: Option<String>,
        /// Only trending movies
        #[arg(long)]
        trending: bool,
    },

    /// Search movie titles
    #[command(alias = "s")]
    Search {
        /// Title substring
        query: Vec<String>,
    },

    /// Show one movie with its download links
    #[command(alias = "i", alias = "info")]
    Show {
        /// Movie ID
        id: String,
    },

    /// Add a movie to the catalogue
    #[command(alias = "a")]
    Add(AddArgs),

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(clap::Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub poster_url: Option<String>,
    #[arg(long = "year")]
    pub release_year: Option<i32>,
    #[arg(long)]
    pub quality: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub language: Option<String>,
    /// Download link as LABEL=URL, repeatable
    #[arg(long = "link", value_name = "LABEL=URL")]
    pub links: Vec<String>,
    /// Mark as trending
    #[arg(long)]
    pub trending: bool,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["moviehub"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_flags_conflict() {
        assert!(Cli::try_parse_from(["moviehub", "list", "--category", "South", "--trending"]).is_err());
        assert!(Cli::try_parse_from(["moviehub", "ls", "--trending"]).is_ok());
    }

    #[test]
    fn test_add_args() {
        let cli = Cli::try_parse_from([
            "moviehub",
            "add",
            "--title",
            "Test",
            "--year",
            "2024",
            "--link",
            "A=#",
            "--link",
            "B=http://b",
            "--trending",
        ])
        .unwrap();

        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.title, "Test");
        assert_eq!(args.release_year, Some(2024));
        assert_eq!(args.links.len(), 2);
        assert!(args.trending);
    }
}
