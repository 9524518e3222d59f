use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a temporary `.yaml` file that lives as long as the handle.
pub fn write_temp_yaml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}
