//! Var command - manage remembered variables

use crate::cli::args::{VarAction, VarArgs};
use crate::error::{GencacheError, GencacheResult};
use crate::generated::CacheStore;
use crate::ui::{self, UiContext};

/// Execute the var command
pub async fn execute(args: VarArgs, store: &mut CacheStore) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;

    match args.action {
        VarAction::List => {
            if cache.vars.is_empty() {
                ui::step_info(&ctx, "No variables set");
            }
            for (key, value) in &cache.vars {
                println!("{}={}", key, value);
            }
        }
        VarAction::Get { key } => {
            let value = cache
                .vars
                .get(&key)
                .ok_or_else(|| GencacheError::VarNotFound(key.clone()))?;
            println!("{}", value);
        }
        VarAction::Set { key, value } => {
            cache.vars.insert(key.clone(), value);
            store.save().await?;
            ui::step_ok(&ctx, &format!("Set {}", key));
        }
        VarAction::Unset { key } => {
            if cache.vars.remove(&key).is_none() {
                return Err(GencacheError::VarNotFound(key));
            }
            store.save().await?;
            ui::step_ok(&ctx, &format!("Removed {}", key));
        }
    }

    Ok(())
}
