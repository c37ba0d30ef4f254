use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{currency::LocaleConfig, domain::HouseholdSnapshot, errors::Result, ingest};

const TMP_SUFFIX: &str = "tmp";

/// Writes `data` next to `path` first and renames it into place.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let staged = stage_and_rename(&tmp, path, data);
    if staged.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    staged
}

fn stage_and_rename(tmp: &Path, path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    drop(file);
    fs::rename(tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Loads a raw JSON snapshot from disk and normalizes it.
pub fn load_snapshot_from_file(path: &Path, locale: &LocaleConfig) -> Result<HouseholdSnapshot> {
    let data = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading household snapshot");
    ingest::snapshot_from_json(&data, locale)
}
