use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the transcript archive
pub const TRANSCRIPT_DIR_ENV: &str = "TRANSCRIPT_DIR";

/// Archive location used when nothing else is configured, relative to the working directory
pub const DEFAULT_TRANSCRIPT_DIR: &str = ".tutor/transcripts";

/// Resolve the transcript archive directory
///
/// An explicit override wins, then a non-blank `TRANSCRIPT_DIR`, then
/// [`DEFAULT_TRANSCRIPT_DIR`].
pub fn get_transcript_dir(override_dir: Option<&Path>) -> PathBuf {
    resolve_transcript_dir(override_dir, env::var(TRANSCRIPT_DIR_ENV).ok().as_deref())
}

fn resolve_transcript_dir(override_dir: Option<&Path>, env_value: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_TRANSCRIPT_DIR),
    }
}
