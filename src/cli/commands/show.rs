//! Show command - print the whole cache

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::error::{GencacheError, GencacheResult};
use crate::generated::{CacheStore, ProjectCache};

/// Execute the show command
pub async fn execute(args: ShowArgs, store: &mut CacheStore) -> GencacheResult<()> {
    let cache = store.load().await?;
    print!("{}", render(cache, args.format)?);
    Ok(())
}

fn render(cache: &ProjectCache, format: OutputFormat) -> GencacheResult<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(cache).map_err(GencacheError::Encode),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(cache)?)),
    }
}
