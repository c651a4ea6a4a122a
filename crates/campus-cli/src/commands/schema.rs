use campus_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `campus schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags.format);
    };
    let Some(schema) = registry.get(name) else {
        anyhow::bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        );
    };
    output(schema, flags.format)
}
