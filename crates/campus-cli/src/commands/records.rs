//! Generic record commands, addressed by entity name.

use anyhow::Context;
use campus_store::dynamic::ListOptions;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CreateArgs, ListArgs, RecordArgs, UpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn list(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = ListOptions {
        filters: args.filter.clone(),
        sort: args.sort.clone(),
        descending: args.desc,
        limit: Some(effective_limit(
            flags.limit,
            ctx.config.general.default_limit,
        )),
    };
    let records = ctx.service.list_values(args.entity, &options)?;
    output(&records, flags.format)
}

pub fn get(args: &RecordArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.service.get_value(args.entity, &args.id)?;
    output(&record, flags.format)
}

pub fn create(args: &CreateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = parse_draft(&args.json)?;
    let record = ctx.service.create_value(args.entity, &draft)?;
    output(&record, flags.format)
}

pub fn update(args: &UpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = parse_draft(&args.json)?;
    let record = ctx.service.update_value(args.entity, &args.id, &draft)?;
    output(&record, flags.format)
}

pub fn delete(args: &RecordArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.service.delete_value(args.entity, &args.id)?;
    output(&record, flags.format)
}

fn parse_draft(raw: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(raw).context("--json is not valid JSON")?;
    anyhow::ensure!(value.is_object(), "--json must be a JSON object");
    Ok(value)
}
