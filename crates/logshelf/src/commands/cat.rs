//! Cat command implementation

use anyhow::{bail, Result};
use logshelf_core::Config;

use crate::output::{print_error, print_records};

pub fn execute(config: Config, file: &str) -> Result<()> {
    let path = logshelf_store::checked_file_path(&config.directory, file)?;

    match logshelf_store::parse_file(&path) {
        Ok(records) => {
            print_records(&records);
            Ok(())
        }
        Err(e) => {
            let message = e.to_string();
            print_error(&message);
            bail!(message)
        }
    }
}
