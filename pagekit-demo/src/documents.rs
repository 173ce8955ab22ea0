//! Converted-document listing, as served by `/api/documents`.

use chrono::{DateTime, Duration, Local, TimeZone};
use pagedom::{Element, Rect};
use pagekit::PagekitError;
use pagekit::utils::{DateFormat, format_file_size, parse_date};
use serde::Deserialize;

const CARD_HEIGHT: f32 = 120.0;
const CARD_GAP: f32 = 16.0;

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub original_filename: String,
    pub pdf_filename: String,
    /// `YYYY-MM-DD HH:MM:SS`, server local time.
    pub created_at: String,
    pub file_size: u64,
}

#[derive(Debug, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<Document>,
}

/// A few documents spread over the last weeks.
pub fn sample(now: DateTime<Local>) -> Vec<Document> {
    let entries = [
        ("quarterly-report.docx", Duration::hours(2), 48_213),
        ("budget.xlsx", Duration::hours(27), 1_536),
        ("slides.pptx", Duration::days(4), 5_347_738),
        ("notes.txt", Duration::days(20), 512),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, age, size))| {
            let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
            Document {
                file_id: format!("doc-{i}"),
                original_filename: name.to_string(),
                pdf_filename: format!("{stem}.pdf"),
                created_at: (now - age).format("%Y-%m-%d %H:%M:%S").to_string(),
                file_size: size,
            }
        })
        .collect()
}

/// Render one `.document-card`, stacked below the cards before it.
pub fn card<Tz>(
    doc: &Document,
    index: usize,
    top: f32,
    format: &DateFormat,
    now: &DateTime<Tz>,
) -> Result<Element, PagekitError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let created = parse_date(&doc.created_at, &now.timezone())?;
    let meta = format!(
        "{} · {}",
        format_file_size(doc.file_size),
        format.format(&created, now)
    );
    let y = top + index as f32 * (CARD_HEIGHT + CARD_GAP);

    Ok(Element::div()
        .id(format!("card-{}", doc.file_id))
        .class("document-card")
        .rect(Rect::new(0.0, y, 800.0, CARD_HEIGHT))
        .children([
            Element::new("h3").text(doc.original_filename.clone()),
            Element::span()
                .class("document-meta")
                .text(meta),
            Element::anchor(format!("/download/{}", doc.file_id))
                .id(format!("download-{}", doc.file_id))
                .class("btn")
                .text(format!("Download {}", doc.pdf_filename))
                .rect(Rect::new(640.0, y + 70.0, 140.0, 36.0)),
        ]))
}
