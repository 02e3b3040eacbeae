//! Ls command implementation

use anyhow::{bail, Result};
use logshelf_core::Config;

use crate::output::{print_error, print_file_table, FileListing};

pub fn execute(config: Config) -> Result<()> {
    let names = match logshelf_store::list(&config.directory) {
        Ok(names) => names,
        Err(e) => {
            print_error(&format!(
                "Cannot list {}: {}",
                config.directory.display(),
                e
            ));
            bail!("Cannot list log directory")
        }
    };

    let files: Vec<FileListing> = names
        .into_iter()
        .map(|file| {
            let metadata = std::fs::metadata(config.directory.join(&file)).ok();
            FileListing { file, metadata }
        })
        .collect();

    print_file_table(&files);
    Ok(())
}
