use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimetableArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus timetable`.
pub fn handle(args: &TimetableArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.service.timetable_for_class(&args.class)?;
    output(&entries, flags.format)
}
