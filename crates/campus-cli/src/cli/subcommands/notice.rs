use clap::Subcommand;

/// Notice board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoticeCommands {
    /// Notices with no expiry or an expiry on or after today.
    Active,
    /// Notices whose expiry date has passed.
    Expired,
}
