use anyhow::Result;

use mapport::application::{list_source_maps, list_zone_sources};
use mapport::infrastructure::LocalFs;
use mapport::presentation::output::render_items;

use super::CommandContext;

pub fn cmd_list(ctx: &CommandContext, zones: bool) -> Result<bool> {
    let paths = ctx.valid_paths()?;
    let fs = LocalFs::new();

    let items = if zones {
        list_zone_sources(&fs, &paths)
    } else {
        list_source_maps(&fs, &paths)
    };

    let rendered = render_items(ctx.format, &items);
    println!("{}", rendered.trim_end());
    Ok(true)
}
