use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::records::list(&args, ctx, flags),
        Commands::Get(args) => commands::records::get(&args, ctx, flags),
        Commands::Create(args) => commands::records::create(&args, ctx, flags),
        Commands::Update(args) => commands::records::update(&args, ctx, flags),
        Commands::Delete(args) => commands::records::delete(&args, ctx, flags),
        Commands::Student { action } => commands::student::handle(&action, ctx, flags),
        Commands::Fee { action } => commands::fee::handle(&action, ctx, flags),
        Commands::Leave { action } => commands::leave::handle(&action, ctx, flags),
        Commands::Notice { action } => commands::notice::handle(&action, ctx, flags),
        Commands::Gallery(args) => commands::gallery::handle(&args, ctx, flags),
        Commands::Timetable(args) => commands::timetable::handle(&args, ctx, flags),
        Commands::Questions(args) => commands::questions::handle(&args, ctx, flags).await,
        Commands::Enquiry(args) => commands::enquiry::handle(&args, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
