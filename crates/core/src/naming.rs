//! Blob key naming for uploaded images.
//!
//! Keys live in a single flat namespace: `{unix_millis}-{random}{.ext}`.
//! The millisecond timestamp keeps listings roughly chronological and the
//! random suffix avoids collisions between uploads in the same millisecond.

use rand::Rng;

/// Length of the random alphanumeric suffix.
const SUFFIX_LEN: usize = 6;

/// Generate a storage key for an uploaded image.
///
/// The extension is taken from the original filename, lowercased. A name
/// without an extension produces a key without one.
///
/// # Examples
///
/// Keys look like `1714406400123-k3Xb9a.jpg`.
pub fn image_key(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    match extension(original_name) {
        Some(ext) => format!("{millis}-{suffix}.{ext}"),
        None => format!("{millis}-{suffix}"),
    }
}

fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
