//! Helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;

use actix_multipart::form::tempfile::TempFile;
use campaign_pulse::forms::upload::UploadCampaignForm;
use tempfile::NamedTempFile;

/// Six data rows: engagement rates 1..=6, share counts 6..=1, first half
/// reels and second half images.
pub const SIX_ROW_CSV: &str = "\
post_id,upload_date,media_type,likes,comments,shares,saves,reach,impressions,caption_length,hashtags_count,followers_gained,traffic_source,engagement_rate,content_category
r1,2024-01-01,reel,10,1,6,1,100,120,50,3,5,organic,1,fitness
r2,2024-01-02,reel,20,2,5,1,100,120,50,3,5,organic,2,fitness
r3,2024-01-03,reel,30,3,4,1,100,120,50,3,5,paid,3,food
r4,2024-01-04,image,40,4,3,1,100,120,50,3,5,paid,4,food
r5,2024-01-05,image,50,5,2,1,100,120,50,3,5,organic,5,travel
r6,2024-01-06,image,60,6,1,1,100,120,50,3,5,organic,6,travel
";

/// Builds an upload form backed by a real temporary file, the same shape the
/// multipart extractor produces.
pub fn csv_form(file_name: &str, contents: &str) -> UploadCampaignForm {
    let mut file = NamedTempFile::new().expect("temp file should be creatable");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    UploadCampaignForm {
        file: TempFile {
            file,
            content_type: None,
            file_name: Some(file_name.to_string()),
            size: contents.len(),
        },
    }
}

/// Encodes a single-file multipart request body for the upload endpoint.
/// Returns the content-type header value and the raw body.
pub fn csv_multipart(file_name: &str, contents: &str) -> (String, Vec<u8>) {
    multipart_file(file_name, "text/csv", contents)
}

/// Same as [`csv_multipart`] but with an explicit part content type.
pub fn multipart_file(file_name: &str, mime: &str, contents: &str) -> (String, Vec<u8>) {
    let boundary = "----campaign-pulse-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents.as_bytes());
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}
