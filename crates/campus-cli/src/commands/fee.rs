use campus_store::drafts::Payment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus fee`.
pub fn handle(action: &FeeCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FeeCommands::Pay {
            id,
            amount,
            date,
            notes,
        } => {
            let payment = Payment {
                amount: *amount,
                date: date
                    .clone()
                    .unwrap_or_else(|| ctx.service.today().to_string()),
                notes: notes.clone(),
            };
            let record = ctx.service.record_fee_payment(id, &payment)?;
            output(&record, flags.format)
        }
    }
}
