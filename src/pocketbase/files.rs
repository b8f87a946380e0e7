//! File URL construction
//!
//! Images attached to records are served by the backend at a well-known
//! path; there is no signing or access control on the client side.

/// Build the URL of a file stored on a record.
pub fn file_url(base_url: &str, collection_id: &str, record_id: &str, filename: &str) -> String {
    format!(
        "{}/api/files/{}/{}/{}",
        base_url.trim_end_matches('/'),
        collection_id,
        record_id,
        filename
    )
}
