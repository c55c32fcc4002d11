use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `contents` to `path`, truncating whatever was there.
///
/// Parent directories are not created; a missing directory is reported as
/// the underlying OS error.
pub fn write_file(path: &Path, contents: &str) -> std::io::Result<usize> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");

        let written = write_file(&path, "<svg/>\n").unwrap();
        assert_eq!(written, 7);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>\n");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(&path, "a much longer document than the replacement").unwrap();

        write_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.svg");

        write_file(&path, "same bytes").unwrap();
        let first = fs::read(&path).unwrap();
        write_file(&path, "same bytes").unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design").join("icon.svg");

        let err = write_file(&path, "<svg/>").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(!path.exists());
    }
}
