//! Deterministic content identity for text records.

/// Computes the content fingerprint of a text record.
///
/// The fingerprint is the lowercase 32-character hex MD5 digest of the
/// text's UTF-8 bytes and acts as the record's primary key in the index:
/// the same text always yields the same id, on every run and platform, so
/// re-ingesting a corpus overwrites records instead of duplicating them.
///
/// Content-only by construction. Timestamps, batch position, or any other
/// state never enter the digest.
pub fn fingerprint(text: &str) -> String {
    let digest = md5::compute(text.as_bytes());
    format!("{digest:x}")
}
