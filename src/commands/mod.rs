pub mod clients;
pub mod delete;
pub mod email;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod report;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log today's tasks and save a report")]
    Report(report::ReportArgs),
    #[command(about = "Browse saved reports with optional filters")]
    History(history::HistoryArgs),
    #[command(about = "List the configured client profiles")]
    Clients,
    #[command(about = "Delete a report and its tasks", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Print the end-of-day email for a report")]
    Email(email::EmailArgs),
    #[command(about = "Export reports as a JSON backup or CSV")]
    Export(export::ExportArgs),
    #[command(about = "Import reports from a JSON backup", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Push local client profiles to the remote store")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Clients => clients::cmd(),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Email(args) => email::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Sync => sync::cmd().await,
        }
    }
}
