use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus student`.
pub fn handle(
    action: &StudentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Promote { id } => {
            let promotion = ctx.service.promote_student(id)?;
            output(&promotion, flags.format)
        }
        StudentCommands::InClass { class } => {
            let students = ctx.service.students_in_class(class)?;
            output(&students, flags.format)
        }
    }
}
