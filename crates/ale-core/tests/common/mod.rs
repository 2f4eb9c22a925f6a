//! Shared helpers for the integration tests

#![allow(dead_code)]

use ale_core::codec::{METADATA_ALE, METADATA_CDL};
use ale_timeline::{Clip, Metadata, MetadataValue};

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build an ALE document from header pairs, columns and rows
pub fn ale_document(headers: &[(&str, &str)], columns: &[&str], rows: &[&[&str]]) -> String {
    let mut text = String::from("Heading\n");
    for (key, value) in headers {
        text.push_str(&format!("{key}\t{value}\n"));
    }
    text.push_str("\nColumn\n");
    text.push_str(&columns.join("\t"));
    text.push_str("\n\nData\n");
    for row in rows {
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    text
}

/// Residual column map of a clip
pub fn residual(clip: &Clip) -> Metadata {
    clip.metadata()
        .get(METADATA_ALE)
        .and_then(MetadataValue::as_map)
        .cloned()
        .unwrap_or_default()
}

/// Structured CDL metadata of a clip
pub fn cdl(clip: &Clip) -> Option<&MetadataValue> {
    clip.metadata().get(METADATA_CDL)
}
