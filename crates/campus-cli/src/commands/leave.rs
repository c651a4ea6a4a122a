use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeaveCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus leave`.
pub fn handle(
    action: &LeaveCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = match action {
        LeaveCommands::Approve { id } => ctx.service.approve_leave(id)?,
        LeaveCommands::Reject { id } => ctx.service.reject_leave(id)?,
    };
    output(&request, flags.format)
}
