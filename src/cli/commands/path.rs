//! Path command - print where the cache lives

use crate::error::GencacheResult;
use crate::generated::CacheStore;

/// Execute the path command
pub fn execute(store: &CacheStore) -> GencacheResult<()> {
    println!("{}", store.resolved_path()?.display());
    Ok(())
}
