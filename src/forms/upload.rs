use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek, SeekFrom};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use thiserror::Error;

use crate::domain::post::Post;

/// Canonical columns that must be present (after header normalization) for an
/// upload to be accepted.
pub const REQUIRED_HEADERS: [&str; 5] = [
    "engagement_rate",
    "media_type",
    "followers_gained",
    "shares",
    "saves",
];

const CSV_CONTENT_TYPES: [&str; 3] = ["text/csv", "application/csv", "application/vnd.ms-excel"];

/// Multipart payload for the campaign upload endpoint.
///
/// The file lands in a named temporary file that is removed when the form is
/// dropped, on success and failure paths alike.
#[derive(MultipartForm)]
pub struct UploadCampaignForm {
    #[multipart(limit = "10MB")]
    pub file: TempFile,
}

/// One data row keyed by normalized header names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUploadRow {
    /// 1-based position of the data row within the file, header excluded.
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

#[derive(Debug, Error)]
pub enum UploadParseError {
    #[error("No file provided")]
    MissingFile,
    #[error("Only .csv files are accepted")]
    InvalidFileType,
    #[error("Failed to read uploaded file")]
    ReadFailed,
    #[error("Failed to parse CSV")]
    CsvParseFailed,
    #[error("header validation failed: {0}")]
    HeaderValidation(String),
    #[error("Missing required columns: {missing}. Columns present in file: {present}")]
    MissingColumns { missing: String, present: String },
}

impl From<std::io::Error> for UploadParseError {
    fn from(_: std::io::Error) -> Self {
        Self::ReadFailed
    }
}

impl From<csv::Error> for UploadParseError {
    fn from(_: csv::Error) -> Self {
        Self::CsvParseFailed
    }
}

/// Decodes the uploaded CSV into rows keyed by normalized header names.
///
/// Header lookup is case-insensitive and whitespace-trimmed; cell values pass
/// through verbatim. Rows are returned in file order. The required-column
/// check runs here so normalization never sees a row missing a canonical
/// field.
pub fn parse_upload(form: &mut UploadCampaignForm) -> Result<Vec<ParsedUploadRow>, UploadParseError> {
    validate_file_meta(form)?;

    let (raw_headers, rows) = parse_csv_rows(form)?;
    let normalized_headers = normalize_headers(&raw_headers)?;
    validate_required_headers(&normalized_headers, &raw_headers)?;

    let parsed_rows = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut values = HashMap::new();
            for (col_idx, header) in normalized_headers.iter().enumerate() {
                let value = row.get(col_idx).cloned().unwrap_or_default();
                values.insert(header.clone(), value);
            }
            ParsedUploadRow {
                row_number: idx + 1,
                values,
            }
        })
        .collect::<Vec<_>>();

    Ok(parsed_rows)
}

/// Maps a parsed row onto a typed [`Post`].
///
/// Numeric cells that fail to parse (including empty ones) silently default
/// to zero; string cells pass through verbatim. The post id is the `post_id`
/// cell when present and non-empty, otherwise the 1-based row position, which
/// keeps ids stable and reproducible for the same file.
pub fn normalize_post(row: &ParsedUploadRow) -> Post {
    let id = match row.values.get("post_id").map(|value| value.trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => row.row_number.to_string(),
    };

    Post {
        id,
        upload_date: string_field(row, "upload_date"),
        media_type: string_field(row, "media_type"),
        likes: int_field(row, "likes"),
        comments: int_field(row, "comments"),
        shares: int_field(row, "shares"),
        saves: int_field(row, "saves"),
        reach: int_field(row, "reach"),
        impressions: int_field(row, "impressions"),
        caption_length: int_field(row, "caption_length"),
        hashtags_count: int_field(row, "hashtags_count"),
        followers_gained: int_field(row, "followers_gained"),
        traffic_source: string_field(row, "traffic_source"),
        engagement_rate: float_field(row, "engagement_rate"),
        content_category: string_field(row, "content_category"),
    }
}

fn string_field(row: &ParsedUploadRow, field: &str) -> String {
    row.values.get(field).cloned().unwrap_or_default()
}

fn int_field(row: &ParsedUploadRow, field: &str) -> i64 {
    row.values
        .get(field)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

fn float_field(row: &ParsedUploadRow, field: &str) -> f64 {
    row.values
        .get(field)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

fn normalize_headers(headers: &[String]) -> Result<Vec<String>, UploadParseError> {
    let normalized = headers
        .iter()
        .map(|header| header.trim().to_ascii_lowercase())
        .collect::<Vec<_>>();

    if normalized.is_empty() {
        return Err(UploadParseError::HeaderValidation(
            "missing header row".to_string(),
        ));
    }

    if normalized.iter().any(|header| header.is_empty()) {
        return Err(UploadParseError::HeaderValidation(
            "header contains empty column name".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for header in &normalized {
        if !seen.insert(header.clone()) {
            return Err(UploadParseError::HeaderValidation(format!(
                "duplicate header column: {header}"
            )));
        }
    }

    Ok(normalized)
}

fn validate_required_headers(
    normalized: &[String],
    raw_headers: &[String],
) -> Result<(), UploadParseError> {
    let header_set = normalized.iter().map(String::as_str).collect::<HashSet<_>>();
    let missing = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|header| !header_set.contains(header))
        .collect::<Vec<_>>();

    if missing.is_empty() {
        return Ok(());
    }

    Err(UploadParseError::MissingColumns {
        missing: missing.join(", "),
        present: raw_headers.join(", "),
    })
}

fn validate_file_meta(form: &UploadCampaignForm) -> Result<(), UploadParseError> {
    let Some(file_name) = form.file.file_name.as_ref() else {
        return Err(UploadParseError::MissingFile);
    };

    if file_name.to_ascii_lowercase().ends_with(".csv") {
        return Ok(());
    }

    if let Some(content_type) = form.file.content_type.as_ref() {
        if CSV_CONTENT_TYPES.contains(&content_type.essence_str()) {
            return Ok(());
        }
    }

    Err(UploadParseError::InvalidFileType)
}

fn parse_csv_rows(
    form: &mut UploadCampaignForm,
) -> Result<(Vec<String>, Vec<Vec<String>>), UploadParseError> {
    let file = form.file.file.as_file_mut();
    file.seek(SeekFrom::Start(0))?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::None)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok((headers, rows))
}
