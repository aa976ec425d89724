//! Append extracted model responses to a plain-text archive.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::core::extract::ModelResponse;

/// Append each response as compact JSON followed by a blank line.
///
/// Creates the file and its parent directories if missing.
#[instrument(skip_all, fields(path = %path.display(), count = responses.len()))]
pub fn append_responses(path: &Path, responses: &[ModelResponse]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for response in responses {
        write!(writer, "{}\n\n", response.record().to_json_string())
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!("appended responses");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::response;
    use serde_json::json;

    #[test]
    fn appends_across_calls() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out").join("model_responses.txt");

        append_responses(&path, &[response(json!({"value": "one"}))]).expect("first");
        append_responses(&path, &[response(json!("two"))]).expect("second");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\"value\":\"one\"}\n\n\"two\"\n\n");
    }
}
