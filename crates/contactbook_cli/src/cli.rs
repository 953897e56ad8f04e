//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use contactbook_core::ContactPatch;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(version)]
#[command(about = "A local contact book")]
pub struct Cli {
    #[arg(
        short = 'd',
        long,
        env = "CONTACTBOOK_DATA_DIR",
        default_value = ".contactbook",
        help = "Directory holding the contact database and logs."
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        env = "CONTACTBOOK_LOG_LEVEL",
        help = "Log level (trace|debug|info|warn|error). Defaults per build mode."
    )]
    pub log_level: Option<String>,

    #[arg(long, help = "Skip the startup loading delay.")]
    pub no_wait: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "List contacts, newest first.")]
    List(ListArgs),
    #[command(about = "Show one contact.")]
    Show(ShowArgs),
    #[command(about = "Add a contact.")]
    Add(AddArgs),
    #[command(about = "Edit fields of a contact.")]
    Edit(EditArgs),
    #[command(about = "Delete a contact after confirmation.")]
    Delete(DeleteArgs),
    #[command(about = "Check core linkage.")]
    Ping,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, default_value = "", help = "Filter by name, email or job title.")]
    pub search: String,
    #[arg(long, help = "Print JSON instead of cards.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[command(flatten)]
    pub details: DetailArgs,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[command(flatten)]
    pub details: DetailArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    #[arg(short, long, help = "Do not ask for confirmation.")]
    pub yes: bool,
}

/// Optional fields shared by add and edit. Pass an empty value to clear one.
#[derive(Debug, Args)]
pub struct DetailArgs {
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub office_phone: Option<String>,
    #[arg(long)]
    pub mobile: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
    #[arg(long)]
    pub linkedin: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
}

impl DetailArgs {
    pub fn into_patch(self, name: Option<String>, email: Option<String>) -> ContactPatch {
        ContactPatch {
            name,
            job_title: self.job_title,
            department: self.department,
            office_phone: self.office_phone,
            mobile: self.mobile,
            email,
            avatar_url: self.avatar_url,
            linkedin: self.linkedin,
            twitter: self.twitter,
            github: self.github,
        }
    }
}
