// crates/footprint-core/src/report.rs

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Px,
};

use crate::chart::ChartSnapshot;
use crate::error::{FootprintError, Result};
use crate::types::{RiskBand, ScaledResult};

pub const REPORT_TITLE: &str = "Carbon Footprint Report";

/// Default file name for the exported report.
pub const REPORT_FILE_NAME: &str = "carbon_report.pdf";

// A4 page, body text grid.
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const TOP_LINE_MM: f64 = 279.0;
const BOTTOM_MARGIN_MM: f64 = 18.0;
const LINE_STEP_MM: f64 = 6.0;

// Advice text reflow width, in characters of 11pt Helvetica.
const ADVICE_WRAP_CHARS: usize = 92;

/// Everything that ends up on the report page. Rendering is deterministic
/// for identical content; the generation timestamp is supplied by the
/// caller.
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub generated_at: DateTime<Utc>,
    pub scaled: ScaledResult,
    /// Unscaled weekly-equivalent total, quoted alongside the scaled view.
    pub weekly_total: f64,
    pub band: RiskBand,
    pub tips: Vec<String>,
    pub advice: Option<String>,
}

/// Renders the report to PDF bytes: title, date, timeframe, totals,
/// breakdown, tips, the chart snapshot top-right, and any advice reflowed to
/// the page width. Overflows onto additional pages as needed.
pub fn render_pdf(content: &ReportContent, chart: Option<&ChartSnapshot>) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(to_report_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(to_report_err)?;

    if let Some(snapshot) = chart {
        embed_chart(&doc.get_page(page).get_layer(layer), snapshot);
    }

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: TOP_LINE_MM,
    };

    cursor.line(REPORT_TITLE, 16.0, 14.0, &bold);
    cursor.gap();
    cursor.line(
        &format!("Date: {}", content.generated_at.format("%Y-%m-%d %H:%M UTC")),
        11.0,
        14.0,
        &regular,
    );
    cursor.line(
        &format!("Timeframe: {}", content.scaled.timeframe),
        11.0,
        14.0,
        &regular,
    );
    cursor.line(
        &format!(
            "Total ({}): {:.2} kg CO2 ({})",
            content.scaled.timeframe, content.scaled.total, content.band
        ),
        11.0,
        14.0,
        &regular,
    );
    cursor.line(
        &format!("Weekly-equivalent: {:.2} kg CO2", content.weekly_total),
        11.0,
        14.0,
        &regular,
    );

    cursor.gap();
    cursor.line("Breakdown", 12.0, 14.0, &bold);
    for (category, value) in content.scaled.parts.entries() {
        cursor.line(
            &format!(
                "- {}: {:.2} kg CO2 ({})",
                category, value, content.scaled.timeframe
            ),
            11.0,
            16.0,
            &regular,
        );
    }

    cursor.gap();
    cursor.line("Tips", 12.0, 14.0, &bold);
    for tip in &content.tips {
        cursor.line(&format!("- {}", tip), 11.0, 16.0, &regular);
    }

    if let Some(advice) = &content.advice {
        cursor.gap();
        cursor.line("Advice", 12.0, 14.0, &bold);
        for row in wrap_text(advice, ADVICE_WRAP_CHARS) {
            cursor.line(&row, 11.0, 16.0, &regular);
        }
    }

    doc.save_to_bytes().map_err(to_report_err)
}

/// Places the chart snapshot in the top-right corner of the first page as a
/// raw RGB image object.
fn embed_chart(layer: &PdfLayerReference, snapshot: &ChartSnapshot) {
    let xobject = ImageXObject {
        width: Px(snapshot.width as usize),
        height: Px(snapshot.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: snapshot.pixels.clone(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    };
    // 104 dpi puts the default 360x270 snapshot at roughly 88x66 mm.
    Image::from(xobject).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(110.0)),
            translate_y: Some(Mm(213.0)),
            dpi: Some(104.0),
            ..Default::default()
        },
    );
}

/// Text layout cursor. Starts a fresh page when the current one runs out of
/// room.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f64,
}

impl PageCursor<'_> {
    fn line(&mut self, text: &str, font_size: f64, indent_mm: f64, font: &IndirectFontRef) {
        if self.y_mm < BOTTOM_MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "report");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = TOP_LINE_MM;
        }
        self.layer
            .use_text(text, font_size as f32, Mm(indent_mm as f32), Mm(self.y_mm as f32), font);
        self.y_mm -= LINE_STEP_MM;
    }

    fn gap(&mut self) {
        self.y_mm -= LINE_STEP_MM / 2.0;
    }
}

/// Greedy word wrap to at most `max_chars` characters per row. Words longer
/// than the limit are kept whole on their own row.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for paragraph in text.lines() {
        let mut row = String::new();
        for word in paragraph.split_whitespace() {
            if row.is_empty() {
                row = word.to_string();
            } else if row.chars().count() + 1 + word.chars().count() <= max_chars {
                row.push(' ');
                row.push_str(word);
            } else {
                rows.push(std::mem::take(&mut row));
                row = word.to_string();
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

fn to_report_err(err: impl std::fmt::Display) -> FootprintError {
    FootprintError::Report(err.to_string())
}
