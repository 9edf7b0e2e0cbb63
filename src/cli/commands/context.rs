//! Context command - show or record the last used cluster context

use crate::cli::args::{ContextAction, ContextArgs};
use crate::error::GencacheResult;
use crate::generated::CacheStore;
use crate::ui::{self, UiContext};

/// Execute the context command
pub async fn execute(args: ContextArgs, store: &mut CacheStore) -> GencacheResult<()> {
    let ctx = UiContext::detect();
    let cache = store.load().await?;

    match args.action {
        None | Some(ContextAction::Show) => match &cache.get_active().last_context {
            Some(last) => {
                ui::key_value(&ctx, "context", Some(last.context.as_str()));
                ui::key_value(&ctx, "namespace", Some(last.namespace.as_str()));
            }
            None => ui::step_info(&ctx, "No context recorded"),
        },
        Some(ContextAction::Set { namespace, context }) => {
            cache
                .get_active()
                .set_last_context(namespace.clone(), context.clone());
            store.save().await?;
            ui::step_ok(&ctx, &format!("Recorded context {} / {}", context, namespace));
        }
    }

    Ok(())
}
