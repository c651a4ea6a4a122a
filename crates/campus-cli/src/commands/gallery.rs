use campus_store::GalleryOrder;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GalleryArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus gallery`.
pub fn handle(args: &GalleryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.tags {
        return output(&ctx.service.gallery_tags()?, flags.format);
    }
    let order = if args.oldest {
        GalleryOrder::OldestFirst
    } else {
        GalleryOrder::NewestFirst
    };
    let items = ctx.service.gallery_view(args.tag.as_deref(), order)?;
    output(&items, flags.format)
}
