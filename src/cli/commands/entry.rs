//! Image and deployment commands - show or update fingerprint entries

use crate::cli::args::EntryArgs;
use crate::error::GencacheResult;
use crate::generated::{CacheEntry, CacheStore, ProfileCache};
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the image command
pub async fn image(args: EntryArgs, store: &mut CacheStore) -> GencacheResult<()> {
    execute(args, store, ProfileCache::get_or_create_image).await
}

/// Execute the deployment command
pub async fn deployment(args: EntryArgs, store: &mut CacheStore) -> GencacheResult<()> {
    execute(args, store, ProfileCache::get_or_create_deployment).await
}

async fn execute<E, F>(args: EntryArgs, store: &mut CacheStore, select: F) -> GencacheResult<()>
where
    E: CacheEntry + Clone,
    F: for<'a> Fn(&'a mut ProfileCache, &str) -> &'a mut E,
{
    let ctx = UiContext::detect();
    let cache = store.load().await?;
    let profile = cache.active_profile_name().to_string();

    let entry = select(cache.get_active(), &args.name);
    apply_assignments(entry, &args.set)?;
    let entry = entry.clone();

    if !args.set.is_empty() {
        debug!("Updated {} {} in profile '{}'", E::KIND, args.name, profile);
        store.save().await?;
        ui::step_ok(
            &ctx,
            &format!("Updated {} {} ({} field(s))", E::KIND, args.name, args.set.len()),
        );
    }

    ui::heading(&ctx, &format!("{} {} [{}]", E::KIND, args.name, profile));
    for (key, value) in entry.fields() {
        ui::key_value(&ctx, key, value);
    }

    Ok(())
}

/// Apply `key=value` assignments in order, stopping at the first bad key
fn apply_assignments<E: CacheEntry>(
    entry: &mut E,
    assignments: &[(String, String)],
) -> GencacheResult<()> {
    for (key, value) in assignments {
        entry.set_field(key, value)?;
    }
    Ok(())
}
