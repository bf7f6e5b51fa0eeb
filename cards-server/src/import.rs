//! Card pool seeding from a document
//!
//! Cards are separated by one or more blank lines. Inside a card all
//! whitespace collapses to single spaces. Plain text and `.docx` are read;
//! for `.docx` every `<w:p>` paragraph of `word/document.xml` is one line,
//! so an empty paragraph separates two cards.

use std::io::{Cursor, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::PgPool;
use zip::ZipArchive;

use crate::db::{CardRepo, DbError};
use crate::models::CardText;

static CARD_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("invalid separator regex"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// A paragraph element, either self-closing or with a body.
/// `<w:pPr>` and friends are excluded by requiring space, `>` or `/>` after `w:p`.
static PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>")
        .expect("invalid paragraph regex")
});

/// A text run, or a break/tab element that stands for whitespace inside a paragraph.
static TEXT_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:(?:br|cr|tab)(?:\s[^>]*)?/>")
        .expect("invalid text run regex")
});

/// Import errors
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid docx archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("document is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
    /// Set when the pool already had cards and seeding was not forced
    pub already_seeded: bool,
}

/// Split document text into normalized card texts.
pub fn split_cards(content: &str) -> Vec<String> {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    CARD_SEPARATOR_RE
        .split(&content)
        .map(|raw| WHITESPACE_RE.replace_all(raw, " ").trim().to_owned())
        .filter(|card| !card.is_empty())
        .collect()
}

/// Extract paragraph text from the bytes of a `.docx` archive, one line per paragraph.
pub fn docx_text(bytes: &[u8]) -> Result<String, ImportError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

    let lines: Vec<String> = PARAGRAPH_RE
        .captures_iter(&xml)
        .map(|para| match para.get(1) {
            Some(body) => TEXT_RUN_RE
                .captures_iter(body.as_str())
                .map(|run| match run.get(1) {
                    Some(text) => decode_entities(text.as_str()),
                    // Breaks and tabs read as a space so they never form a blank line
                    None => " ".to_owned(),
                })
                .collect(),
            None => String::new(),
        })
        .collect();

    Ok(lines.join("\n"))
}

fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Read a document from disk as text, unpacking `.docx` archives.
pub async fn read_document(path: &Path) -> Result<String, ImportError> {
    let bytes = tokio::fs::read(path).await?;

    let is_docx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);

    if is_docx {
        docx_text(&bytes)
    } else {
        let text = String::from_utf8(bytes)?;
        Ok(match text.strip_prefix('\u{FEFF}') {
            Some(rest) => rest.to_owned(),
            None => text,
        })
    }
}

/// Insert cards into the pool.
///
/// Does nothing when cards already exist unless `force` is set. Cards that
/// fail validation are skipped with a warning.
pub async fn seed_cards(
    pool: &PgPool,
    cards: &[String],
    force: bool,
) -> Result<SeedReport, ImportError> {
    let repo = CardRepo::new(pool);

    if !force && repo.count().await? > 0 {
        tracing::info!("Card pool already populated, skipping seed");
        return Ok(SeedReport {
            already_seeded: true,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();
    for (idx, raw) in cards.iter().enumerate() {
        match CardText::new(raw) {
            Ok(text) => {
                repo.create(&text).await?;
                report.inserted += 1;
            }
            Err(e) => {
                tracing::warn!(card = idx + 1, "Skipping card: {}", e);
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "Card pool seeded"
    );
    Ok(report)
}

/// Read `path` and seed the card pool from it.
pub async fn seed_from_file(
    pool: &PgPool,
    path: &Path,
    force: bool,
) -> Result<SeedReport, ImportError> {
    let content = read_document(path).await?;
    let cards = split_cards(&content);
    tracing::info!(path = %path.display(), cards = cards.len(), "Parsed card document");

    seed_cards(pool, &cards, force).await
}
