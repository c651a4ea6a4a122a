use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoticeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus notice`.
pub fn handle(action: &NoticeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notices = match action {
        NoticeCommands::Active => ctx.service.notices_active()?,
        NoticeCommands::Expired => ctx.service.notices_expired()?,
    };
    output(&notices, flags.format)
}
