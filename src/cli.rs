use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snipbox")]
#[command(about = "A local code snippet manager")]
#[command(version)]
pub struct Cli {
    /// Path to the snippet database (defaults to the user data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a new snippet
    Add(AddArgs),

    /// Print a single snippet by ID
    Show(ShowArgs),

    /// List all stored snippets
    List(ListArgs),

    /// Update fields of an existing snippet
    Update(UpdateArgs),

    /// Delete a snippet by ID
    Delete(DeleteArgs),

    /// List the distinct languages in the store
    Languages,

    /// List the distinct categories in the store
    Categories,

    /// Find snippets by exact language, category, or title
    Find(FindArgs),
}

#[derive(Parser)]
pub struct AddArgs {
    /// Language label, e.g. "Python"
    #[arg(long)]
    pub language: String,

    /// Snippet title
    #[arg(long)]
    pub title: String,

    /// Category label, e.g. "Getting Started"
    #[arg(long)]
    pub category: String,

    /// Snippet body given inline
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub code: Option<String>,

    /// Read the snippet body from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Free-text annotation
    #[arg(long, default_value = "")]
    pub info: String,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Snippet ID
    pub id: i64,

    /// Output as JSON instead of the detail view
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Snippet ID
    pub id: i64,

    /// New language label
    #[arg(long)]
    pub language: Option<String>,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New snippet body given inline
    #[arg(long, conflicts_with = "file")]
    pub code: Option<String>,

    /// Read the new snippet body from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// New category label
    #[arg(long)]
    pub category: Option<String>,

    /// New annotation
    #[arg(long)]
    pub info: Option<String>,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Snippet ID
    pub id: i64,
}

#[derive(Parser)]
pub struct FindArgs {
    /// Exact language to match
    #[arg(long)]
    pub language: Option<String>,

    /// Exact category to match
    #[arg(long)]
    pub category: Option<String>,

    /// Exact title to match (cannot be combined with the other filters)
    #[arg(long, conflicts_with_all = ["language", "category"])]
    pub title: Option<String>,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
