use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::OfferError;
use crate::models::ProductSnapshot;

/// Writes the snapshot as pretty-printed JSON, replacing any existing file.
pub fn save_snapshot(snapshot: &ProductSnapshot, path: &Path) -> Result<(), OfferError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    info!(path = %path.display(), "snapshot archived");
    Ok(())
}
