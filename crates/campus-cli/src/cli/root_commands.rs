use std::path::PathBuf;

use campus_core::enums::EntityType;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{FeeCommands, LeaveCommands, NoticeCommands, StudentCommands};
use crate::commands::shared::parse::{parse_entity, parse_filter};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List records of one entity type.
    List(ListArgs),
    /// Get a record by ID.
    Get(RecordArgs),
    /// Create a record from a JSON draft.
    Create(CreateArgs),
    /// Replace a record's editable fields from a JSON draft.
    Update(UpdateArgs),
    /// Delete a record by ID.
    Delete(RecordArgs),
    /// Student operations.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Fee record operations.
    Fee {
        #[command(subcommand)]
        action: FeeCommands,
    },
    /// Leave request decisions.
    Leave {
        #[command(subcommand)]
        action: LeaveCommands,
    },
    /// Notice board.
    Notice {
        #[command(subcommand)]
        action: NoticeCommands,
    },
    /// Browse the gallery.
    Gallery(GalleryArgs),
    /// Weekly timetable for a class.
    Timetable(TimetableArgs),
    /// Generate study questions from a document.
    Questions(QuestionsArgs),
    /// Submit an admission enquiry.
    Enquiry(EnquiryArgs),
    /// List or print registered JSON Schemas.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Entity type, e.g. student, fee-record, leave-request
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,

    /// Keep records whose field equals the value (case-insensitive), as field=value
    #[arg(long, value_parser = parse_filter)]
    pub filter: Vec<(String, String)>,

    /// Sort by a field instead of the canonical order
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RecordArgs {
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,

    /// Draft as a JSON object (camelCase fields)
    #[arg(long)]
    pub json: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,
    pub id: String,

    /// Draft as a JSON object (camelCase fields)
    #[arg(long)]
    pub json: String,
}

#[derive(Clone, Debug, Args)]
pub struct GalleryArgs {
    /// Only items with this event tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Oldest first instead of newest first
    #[arg(long)]
    pub oldest: bool,

    /// Print the distinct event tags instead of items
    #[arg(long, conflicts_with_all = ["tag", "oldest"])]
    pub tags: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TimetableArgs {
    /// Class identifier, e.g. 5A
    pub class: String,
}

#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct QuestionsArgs {
    /// Document text
    #[arg(long)]
    pub text: Option<String>,

    /// Read the document from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct EnquiryArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long = "class")]
    pub class_interested: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; lists all names when omitted
    pub name: Option<String>,
}
