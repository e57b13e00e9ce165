//! Denylist management module
//!
//! Handles loading and querying the list of commonly used PINs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::pin::Digits;

static COMMON_PINS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

const DEFAULT_DENYLIST_PATH: &str = "./assets/common-pins.txt";

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file contains no PINs")]
    EmptyFile,
}

// The set is only ever replaced whole, so a poisoned lock still holds valid data.
fn read_guard() -> RwLockReadGuard<'static, Option<HashSet<String>>> {
    COMMON_PINS.read().unwrap_or_else(|e| e.into_inner())
}

fn write_guard() -> RwLockWriteGuard<'static, Option<HashSet<String>>> {
    COMMON_PINS.write().unwrap_or_else(|e| e.into_inner())
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `PIN_DENYLIST_PATH`
/// 2. Default path `./assets/common-pins.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("PIN_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DENYLIST_PATH))
}

/// Initializes the PIN denylist from external file.
///
/// # Environment Variable
///
/// Set `PIN_DENYLIST_PATH` to specify a custom denylist file location.
/// If not set, defaults to `./assets/common-pins.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File holds no well-formed PIN
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Initializes the PIN denylist from a specific file path.
///
/// The file holds one PIN per line. Blank lines and lines that are not
/// exactly four digits are ignored. Once loaded, later calls are no-ops
/// that return the current number of entries.
///
/// # Example
///
/// ```rust,ignore
/// let count = pin_entropy::init_denylist_from_path("/etc/myapp/common-pins.txt")?;
/// ```
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn init_denylist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, DenylistError> {
    if let Some(set) = read_guard().as_ref() {
        return Ok(set.len());
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let mut set = HashSet::new();
    for (line_no, line) in content.lines().enumerate() {
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if Digits::parse(entry).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Skipping malformed denylist entry at line {}", line_no + 1);
            continue;
        }
        set.insert(entry.to_string());
    }

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: no PINs in {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    let count = set.len();
    *write_guard() = Some(set);

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist initialized: {} PINs from {:?}", count, path);

    Ok(count)
}

/// Returns a clone of the loaded denylist.
///
/// Returns `None` if no denylist has been loaded.
pub fn get_denylist() -> Option<HashSet<String>> {
    read_guard().clone()
}

/// Checks if a PIN is in the denylist.
///
/// Returns `false` if the denylist is not initialized.
pub fn is_denylisted(pin: &str) -> bool {
    read_guard()
        .as_ref()
        .map(|set| set.contains(pin))
        .unwrap_or(false)
}

/// Resets the denylist for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    *write_guard() = None;
}
