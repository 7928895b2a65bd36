use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use std::path::Path;

/// Check the file size before reading it, so an input larger than the
/// configured limit is never loaded into memory.
pub fn check_source_size_before_read(path: &Path, config: &ConversionConfig) -> ConversionResult<()> {
    let metadata = std::fs::metadata(path).map_err(|e| ConversionError::io_read(path, e))?;

    if metadata.len() > config.memory_limit as u64 {
        return Err(ConversionError::InputTooLarge {
            size: metadata.len(),
            limit: config.memory_limit,
        });
    }

    Ok(())
}
