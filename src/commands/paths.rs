use anyhow::Result;

use mapport::presentation::create_paths;
use mapport::presentation::output::render_paths;

use super::CommandContext;

/// Prints the resolved layout even when a directory is missing
pub fn cmd_paths(ctx: &CommandContext) -> Result<bool> {
    let paths = create_paths(&ctx.config)?;
    let rendered = render_paths(ctx.format, &paths);
    println!("{}", rendered.trim_end());
    Ok(true)
}
