//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// gencache - Generated Project Cache
///
/// Inspect and update the per-project cache of build and deploy
/// fingerprints stored in .devspace/generated.yaml.
#[derive(Parser, Debug)]
#[command(name = "gencache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Cache file path (defaults to .devspace/generated.yaml)
    #[arg(short, long, global = true, env = "GENCACHE_FILE")]
    pub file: Option<PathBuf>,

    /// Profile to use for this invocation instead of the active one
    #[arg(short, long, global = true, env = "GENCACHE_PROFILE")]
    pub profile: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the cache file path
    Path,

    /// Print the whole cache
    Show(ShowArgs),

    /// Show or switch profiles
    Profile(ProfileArgs),

    /// Show or update an image entry of the profile in effect
    Image(EntryArgs),

    /// Show or update a deployment entry of the profile in effect
    Deployment(EntryArgs),

    /// Manage remembered variables
    Var(VarArgs),

    /// Manage resolved dependency versions
    Dependency(DependencyArgs),

    /// Show or record the last used cluster context
    Context(ContextArgs),

    /// Print the fingerprint of one or more files
    Hash(HashArgs),
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML, as stored on disk
    #[default]
    Yaml,
    /// JSON output
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, default_value = "yaml")]
    pub format: OutputFormat,
}

/// Arguments for the profile command
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Subcommand for profile
    #[command(subcommand)]
    pub action: Option<ProfileAction>,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the profile in effect and its entries
    Show,

    /// Make a profile the active one
    Use {
        /// Profile name
        name: String,
    },

    /// Forget everything cached for a profile
    Reset {
        /// Profile name (defaults to the profile in effect)
        name: Option<String>,
    },
}

/// Arguments for the image and deployment commands
#[derive(Parser, Debug)]
pub struct EntryArgs {
    /// Entry name
    pub name: String,

    /// Field assignments (key=value, empty value clears)
    #[arg(short, long, value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

/// Arguments for the var command
#[derive(Parser, Debug)]
pub struct VarArgs {
    /// Subcommand for var
    #[command(subcommand)]
    pub action: VarAction,
}

/// Var subcommands
#[derive(Subcommand, Debug)]
pub enum VarAction {
    /// List all variables
    List,

    /// Print a variable
    Get {
        /// Variable name
        key: String,
    },

    /// Set a variable
    Set {
        /// Variable name
        key: String,
        /// Value to remember
        value: String,
    },

    /// Remove a variable
    Unset {
        /// Variable name
        key: String,
    },
}

/// Arguments for the dependency command
#[derive(Parser, Debug)]
pub struct DependencyArgs {
    /// Subcommand for dependency
    #[command(subcommand)]
    pub action: DependencyAction,
}

/// Dependency subcommands
#[derive(Subcommand, Debug)]
pub enum DependencyAction {
    /// List dependency versions of the profile in effect
    List,

    /// Record a dependency version
    Set {
        /// Dependency name
        name: String,
        /// Resolved version
        #[arg(id = "dependency_version", value_name = "VERSION")]
        version: String,
    },
}

/// Arguments for the context command
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Subcommand for context
    #[command(subcommand)]
    pub action: Option<ContextAction>,
}

/// Context subcommands
#[derive(Subcommand, Debug)]
pub enum ContextAction {
    /// Show the last used context
    Show,

    /// Record the last used context
    Set {
        /// Kubernetes namespace
        #[arg(short, long)]
        namespace: String,

        /// Kubernetes context name
        #[arg(short, long)]
        context: String,
    },
}

/// Arguments for the hash command
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Files to fingerprint, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Parse a field assignment in KEY=VALUE format
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=VALUE format: no '=' found in '{s}'"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}
