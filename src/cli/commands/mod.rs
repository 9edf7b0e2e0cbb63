//! CLI command implementations

pub mod context;
pub mod dependency;
pub mod entry;
pub mod hash;
pub mod path;
pub mod profile;
pub mod show;
pub mod var;

pub use context::execute as context;
pub use dependency::execute as dependency;
pub use entry::{deployment, image};
pub use hash::execute as hash;
pub use path::execute as path;
pub use profile::execute as profile;
pub use show::execute as show;
pub use var::execute as var;
