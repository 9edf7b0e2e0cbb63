//! Dependency command - manage resolved dependency versions

use crate::cli::args::{DependencyAction, DependencyArgs};
use crate::error::GencacheResult;
use crate::generated::CacheStore;
use crate::ui::{self, UiContext};

/// Execute the dependency command
pub async fn execute(args: DependencyArgs, store: &mut CacheStore) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;

    match args.action {
        DependencyAction::List => {
            let profile = cache.get_active();
            if profile.dependencies.is_empty() {
                ui::step_info(&ctx, "No dependency versions recorded");
            }
            for (name, version) in &profile.dependencies {
                println!("{} {}", name, version);
            }
        }
        DependencyAction::Set { name, version } => {
            cache.get_active().set_dependency(name.clone(), version.clone());
            store.save().await?;
            ui::step_ok(&ctx, &format!("Recorded {} {}", name, version));
        }
    }

    Ok(())
}
