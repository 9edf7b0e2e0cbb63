//! Hash command - fingerprint files for cache entries

use crate::cli::args::HashArgs;
use crate::error::GencacheResult;
use crate::fingerprint;

/// Execute the hash command
pub fn execute(args: HashArgs) -> GencacheResult<()> {
    let hash = match args.paths.as_slice() {
        [single] => fingerprint::hash_file(single)?,
        paths => fingerprint::hash_files(paths)?,
    };
    println!("{}", hash);
    Ok(())
}
