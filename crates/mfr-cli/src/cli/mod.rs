//! CLI for the meeting file renamer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mfr_core::config;
use std::path::PathBuf;

use commands::{
    run_completions, run_meetings, run_pack, run_preview, run_suggest_keyword, run_title,
    PacketArgs,
};

/// Top-level CLI for the meeting file renamer.
#[derive(Debug, Parser)]
#[command(name = "mfr")]
#[command(about = "Rename meeting files to the standard scheme and bundle them into one archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the selectable meeting types and dates.
    Meetings,

    /// Show the title derived from an agenda description.
    Title {
        /// Agenda description (up to 50 characters).
        description: String,
    },

    /// Suggest an attachment keyword from free text.
    SuggestKeyword {
        /// Free-text description of the attachment.
        text: String,
    },

    /// Show the old → new name for every file without writing anything.
    Preview {
        #[command(flatten)]
        packet: PacketArgs,

        /// Print the preview as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Rename all files into one archive named after the meeting date.
    Pack {
        #[command(flatten)]
        packet: PacketArgs,

        /// Directory to write the archive to (default: config output_dir, else current dir).
        #[arg(long, short, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Replace an existing archive with the same name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Print shell completions for mfr.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Meetings => run_meetings(),
            CliCommand::Title { description } => run_title(&description)?,
            CliCommand::SuggestKeyword { text } => run_suggest_keyword(&text),
            CliCommand::Preview { packet, json } => {
                let session = packet.into_session(&cfg)?;
                run_preview(&session, json)?;
            }
            CliCommand::Pack {
                packet,
                out,
                overwrite,
            } => {
                let session = packet.into_session(&cfg)?;
                run_pack(&session, &cfg, out.as_deref(), overwrite).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
