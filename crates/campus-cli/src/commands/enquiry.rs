use campus_core::flows::EnquiryInput;
use campus_genai::EnquiryFlow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnquiryArgs;
use crate::output::output;

/// Handle `campus enquiry`. Enquiries are public and need no session.
pub async fn handle(args: &EnquiryArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = EnquiryInput {
        full_name: args.name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        class_interested: args.class_interested.clone(),
        message: args.message.clone(),
    };
    let reply = EnquiryFlow::default().submit(&input).await?;
    output(&reply, flags.format)
}
