//! CSV transcoding for the product catalog.
//!
//! The format is the one the admin panel has always produced: a fixed
//! 8-column header, free-text columns quote-wrapped with embedded quotes
//! doubled, everything else emitted raw. Decoding is a small two-state
//! scanner, not a general RFC 4180 parser, and rows that do not meet the
//! minimum shape are dropped without comment. Existing exports depend on
//! both halves of that contract; keep them as they are.

use thiserror::Error;

use fibertech_core::ProductId;

use crate::product::Product;

/// Column order of the export header.
pub const HEADER: &str = "id,title,code,description,imageUrl,category,published,fullDescription";

/// Default filename for a full catalog export.
pub const EXPORT_FILENAME: &str = "products.csv";

/// Suggested filename for the downloadable sample template.
pub const TEMPLATE_FILENAME: &str = "product_import_template.csv";

/// Import failure. Deliberately coarse: the surrounding UI shows one
/// generic "parsing failed" notification, and individual bad rows are
/// dropped rather than reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("parsing failed: {0}")]
    Parse(String),
}

/// Errors raised before any file contents reach the importer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilePickError {
    #[error("no file selected")]
    Missing,
    #[error("'{0}' is not a CSV file")]
    NotCsv(String),
}

/// Pre-flight check for a user-picked import file.
///
/// `mime` is whatever the host file picker reports, when it reports one.
pub fn check_import_file(name: Option<&str>, mime: Option<&str>) -> Result<(), FilePickError> {
    let name = name.ok_or(FilePickError::Missing)?;
    if mime == Some("text/csv") || name.to_ascii_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(FilePickError::NotCsv(name.to_string()))
    }
}

/// Serialize products to CSV text.
///
/// Only `title`, `description` and `fullDescription` are quote-wrapped
/// and escaped; `id`, `code`, `imageUrl` and `category` go out as-is, so
/// a comma in one of those columns corrupts its row. Known limitation of
/// the format, preserved for compatibility with existing exports.
pub fn encode(products: &[Product]) -> String {
    let mut out = String::from(HEADER);
    for product in products {
        out.push('\n');
        out.push_str(&encode_row(product));
    }
    out
}

fn encode_row(product: &Product) -> String {
    [
        product.id.as_str().to_string(),
        quote(&product.title),
        product.code.clone(),
        quote(&product.description),
        product.image_url.clone(),
        product.category.clone(),
        product.published.to_string(),
        quote(product.full_description.as_deref().unwrap_or("")),
    ]
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Parse CSV text into products, best-effort.
///
/// The header row is matched case-sensitively; unknown columns are
/// ignored and a missing `fullDescription` column is tolerated. Data rows
/// with fewer fields than the header are skipped, as is any row whose
/// `title` or `description` comes out empty. Only an input without a
/// usable header fails the call as a whole.
pub fn decode(text: &str) -> Result<Vec<Product>, CsvError> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| CsvError::Parse("empty input".to_string()))?;
    let columns = ColumnMap::from_header(&split_row(header))?;

    let mut products = Vec::new();
    for line in lines {
        let fields = split_row(line);
        if fields.len() < columns.width {
            continue;
        }
        if let Some(product) = columns.row_to_product(&fields) {
            products.push(product);
        }
    }
    Ok(products)
}

/// Header-derived column positions. Width is the full header column
/// count, unknown columns included, so short rows are measured against
/// what the file itself declared.
#[derive(Debug)]
struct ColumnMap {
    width: usize,
    id: Option<usize>,
    title: Option<usize>,
    code: Option<usize>,
    description: Option<usize>,
    image_url: Option<usize>,
    category: Option<usize>,
    published: Option<usize>,
    full_description: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Result<Self, CsvError> {
        let mut map = Self {
            width: header.len(),
            id: None,
            title: None,
            code: None,
            description: None,
            image_url: None,
            category: None,
            published: None,
            full_description: None,
        };

        for (index, name) in header.iter().enumerate() {
            match unquote(name).as_str() {
                "id" => map.id = Some(index),
                "title" => map.title = Some(index),
                "code" => map.code = Some(index),
                "description" => map.description = Some(index),
                "imageUrl" => map.image_url = Some(index),
                "category" => map.category = Some(index),
                "published" => map.published = Some(index),
                "fullDescription" => map.full_description = Some(index),
                _ => {}
            }
        }

        if map.id.is_none()
            && map.title.is_none()
            && map.description.is_none()
            && map.code.is_none()
        {
            return Err(CsvError::Parse("no recognized header row".to_string()));
        }
        Ok(map)
    }

    fn row_to_product(&self, fields: &[String]) -> Option<Product> {
        let take = |column: Option<usize>| -> String {
            column
                .and_then(|index| fields.get(index))
                .map(|raw| unquote(raw))
                .unwrap_or_default()
        };

        let title = take(self.title);
        let description = take(self.description);
        if title.is_empty() || description.is_empty() {
            return None;
        }

        let full_description = take(self.full_description);
        Some(Product {
            id: ProductId::new(take(self.id)),
            title,
            code: take(self.code),
            description,
            image_url: take(self.image_url),
            category: take(self.category),
            published: take(self.published) == "true",
            full_description: (!full_description.is_empty()).then_some(full_description),
            specifications: Vec::new(),
            features: Vec::new(),
            documents: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Split one row on unquoted commas.
///
/// A `"` toggles the quoted state unless immediately followed by a second
/// `"`, which stays in the field as a literal pair for [`unquote`] to
/// collapse. Field text is kept verbatim, surrounding quotes included.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = ScanState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (state, c) {
            (ScanState::Quoted, '"') if chars.peek() == Some(&'"') => {
                field.push_str("\"\"");
                chars.next();
            }
            (ScanState::Quoted, '"') => {
                field.push('"');
                state = ScanState::Unquoted;
            }
            (ScanState::Unquoted, '"') => {
                field.push('"');
                state = ScanState::Quoted;
            }
            (ScanState::Unquoted, ',') => {
                fields.push(std::mem::take(&mut field));
            }
            (_, other) => field.push(other),
        }
    }

    fields.push(field);
    fields
}

/// Strip one layer of surrounding quotes and collapse doubled quotes.
fn unquote(field: &str) -> String {
    let inner = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(field);
    inner.replace("\"\"", "\"")
}

/// A fixed two-row illustrative CSV for users to download before their
/// first import. Deliberately not derived from the live catalog.
pub fn sample_template() -> String {
    [
        HEADER,
        "sample-product-1,\"Sample Fiber Cable\",SFC-100,\"Example single-mode cable entry\",https://example.com/images/sample-cable.jpg,fiber-cables,true,\"Longer marketing copy goes here\"",
        "sample-product-2,\"Sample Splice Tray\",SST-12,\"Example accessory entry\",https://example.com/images/sample-tray.jpg,accessories,false,\"\"",
    ]
    .join("\n")
}
