use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Result};

use crate::constants::defaults;

/// Reads a JSON payload from `path`, or from stdin when `path` is `-`.
pub fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == defaults::STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| anyhow!("Failed to read payload from stdin: {}", e))?;
        return Ok(buf);
    }
    log::debug!("Reading payload from {}", path.display());
    fs::read(path).map_err(|e| anyhow!("Failed to read payload file {}: {}", path.display(), e))
}
