use clap::Subcommand;

/// Leave request commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LeaveCommands {
    /// Approve a pending request.
    Approve { id: String },
    /// Reject a pending request.
    Reject { id: String },
}
