//! Atomic file writes
//!
//! Writes go to a sibling temporary file which is then renamed over the
//! target, so readers never observe a half-written file.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `content` to `path`, creating parent directories as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{}.tmp{}", file_name, std::process::id()));

    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}
