//! Date-stamped unique artifact names.

use chrono::Local;
use uuid::Uuid;

/// Filename stem for one export attempt: a random token plus the current
/// calendar date in compact form. The date reflects the moment of export,
/// not of record creation. Uniqueness rests on the randomness source; no
/// collision check is made.
pub fn artifact_stem() -> String {
    format!(
        "certificate_{}_{}",
        Uuid::new_v4(),
        Local::now().format("%Y%m%d")
    )
}
