//! Profile command - show, switch and reset profiles

use crate::cli::args::{ProfileAction, ProfileArgs};
use crate::error::{GencacheError, GencacheResult};
use crate::generated::{CacheStore, ProfileCache, ProjectCache};
use crate::ui::{self, UiContext};
use console::style;

/// Execute the profile command
pub async fn execute(args: ProfileArgs, store: &mut CacheStore) -> GencacheResult<()> {
    match args.action {
        None | Some(ProfileAction::Show) => show(store).await,
        Some(ProfileAction::Use { name }) => use_profile(store, &name).await,
        Some(ProfileAction::Reset { name }) => reset(store, name).await,
    }
}

async fn show(store: &mut CacheStore) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;
    let name = cache.active_profile_name().to_string();

    let source = if cache.override_profile.is_some() {
        "override"
    } else {
        "active"
    };
    ui::heading(&ctx, &format!("Profile: {} ({})", display_name(&name), source));

    let profile = cache.get_active();
    print_summary(&ctx, profile);

    let others = other_profiles(cache, &name);
    if !others.is_empty() {
        println!();
        ui::remark(&ctx, &format!("Other profiles: {}", others.join(", ")));
    }

    Ok(())
}

fn print_summary(ctx: &UiContext, profile: &ProfileCache) {
    if profile.is_empty() {
        ui::step_info(ctx, "Nothing cached yet");
        return;
    }

    for (name, image) in &profile.images {
        let tag = image.tag.as_deref().unwrap_or("-");
        println!("  {} {} (tag: {})", style("image").cyan(), name, tag);
    }
    for name in profile.deployments.keys() {
        println!("  {} {}", style("deployment").cyan(), name);
    }
    for (name, version) in &profile.dependencies {
        println!("  {} {} {}", style("dependency").cyan(), name, version);
    }
    if let Some(last) = &profile.last_context {
        println!(
            "  {} {} / {}",
            style("context").cyan(),
            last.context,
            last.namespace
        );
    }
}

/// Names of all profiles except `current`, in sorted order
fn other_profiles(cache: &ProjectCache, current: &str) -> Vec<String> {
    cache
        .profiles
        .keys()
        .filter(|name| name.as_str() != current)
        .map(|name| display_name(name).to_string())
        .collect()
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<none>"
    } else {
        name
    }
}

async fn use_profile(store: &mut CacheStore, name: &str) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;

    cache.active_profile = name.to_string();
    cache.ensure_profile(name);
    let overridden = cache
        .override_profile
        .as_deref()
        .filter(|o| *o != name)
        .map(str::to_string);

    store.save().await?;
    ui::step_ok(&ctx, &format!("Active profile set to {}", name));

    if let Some(other) = overridden {
        ui::step_warn(
            &ctx,
            &format!("Override profile {} still applies to this invocation", other),
        );
    }
    Ok(())
}

async fn reset(store: &mut CacheStore, name: Option<String>) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;
    let name = name.unwrap_or_else(|| cache.active_profile_name().to_string());

    if !cache.reset_profile(&name) {
        return Err(GencacheError::ProfileNotFound(name));
    }
    store.save().await?;

    ui::step_ok(
        &ctx,
        &format!("Cleared cached state of profile {}", display_name(&name)),
    );
    Ok(())
}
