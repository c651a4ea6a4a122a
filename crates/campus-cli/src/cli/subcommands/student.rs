use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Move a student up one class level.
    Promote { id: String },
    /// Students enrolled in a class, by name.
    InClass { class: String },
}
