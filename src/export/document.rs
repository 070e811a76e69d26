//! Paginated document export
//!
//! Serializes a filtered report into a branded A4 PDF: one page group per
//! period, a running header and footer on every page, a summary panel before
//! each period's line-item table, and alternating row shading in the table.
//!
//! Pagination is planned before anything is drawn, then footers are written
//! onto every page once the total page count is known. The document is built
//! fully in memory and written atomically, so a failed export never leaves a
//! partial file behind.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::ops::Range;
use std::path::Path;

use chrono::Local;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect, Rgb,
};

use crate::config::Settings;
use crate::display::truncate;
use crate::error::{ClubError, ClubResult};
use crate::models::{Money, PeriodBucket, PeriodKey};
use crate::reports::{range_label, FilteredReport, FlowTotals, FundTotals, ReportKind};

use super::{record_cells, schema, TableSchema};

// A4 geometry, millimetres measured from the top-left corner
const PAGE_W: f64 = 210.0;
const PAGE_H: f64 = 297.0;
const MARGIN_X: f64 = 14.0;

const HEADER_RULE_TOP: f64 = 26.0;
const FOOTER_RULE_TOP: f64 = 281.0;

/// Tables must end above the footer rule
const CONTENT_BOTTOM: f64 = FOOTER_RULE_TOP - 4.0;

const SUMMARY_TOP: f64 = 32.0;
const SUMMARY_H: f64 = 32.0;

const TABLE_TOP_FIRST: f64 = SUMMARY_TOP + SUMMARY_H + 6.0;
const TABLE_TOP_CONT: f64 = 32.0;
const TABLE_HEADER_H: f64 = 8.0;
const ROW_H: f64 = 7.0;

/// Record rows that fit under the summary panel on a period's first page:
/// (CONTENT_BOTTOM - TABLE_TOP_FIRST - TABLE_HEADER_H) / ROW_H
const FIRST_PAGE_ROWS: usize = 28;

/// Record rows that fit on a continuation page:
/// (CONTENT_BOTTOM - TABLE_TOP_CONT - TABLE_HEADER_H) / ROW_H
const CONT_PAGE_ROWS: usize = 33;

const PT_TO_MM: f64 = 0.352778;

fn rgb(r: f64, g: f64, b: f64) -> Color {
    Color::Rgb(Rgb::new(r as f32, g as f32, b as f32, None))
}

fn navy() -> Color {
    rgb(0.13, 0.16, 0.20)
}

fn gold() -> Color {
    rgb(0.83, 0.64, 0.22)
}

fn card_bg() -> Color {
    rgb(0.973, 0.980, 0.988)
}

fn rule_gray() -> Color {
    rgb(0.90, 0.90, 0.90)
}

fn text_dark() -> Color {
    rgb(0.16, 0.16, 0.16)
}

fn text_mid() -> Color {
    rgb(0.35, 0.35, 0.35)
}

fn text_light() -> Color {
    rgb(0.47, 0.47, 0.47)
}

/// Convert a distance from the page top into the PDF's bottom-up coordinates
fn from_top(top: f64) -> Mm {
    Mm((PAGE_H - top) as f32)
}

/// Approximate the rendered width of Helvetica text
///
/// The builtin PDF fonts ship no metrics we can query, so right alignment
/// works from per-glyph em widths. Digits and separators (the right-aligned
/// amount cells) are exact; prose is close enough for layout.
fn text_width_mm(text: &str, font_size: f64) -> f64 {
    let em: f64 = text
        .chars()
        .map(|c| match c {
            '0'..='9' => 0.556,
            ',' | '.' | ':' | ';' | ' ' | '\'' => 0.278,
            'i' | 'j' | 'l' | 't' | 'f' | 'I' => 0.30,
            '-' | '(' | ')' => 0.333,
            'm' | 'M' | 'W' | 'w' => 0.833,
            c if c.is_ascii_uppercase() => 0.677,
            _ => 0.515,
        })
        .sum();
    em * font_size * PT_TO_MM
}

/// One planned page of output
#[derive(Debug, Clone, PartialEq, Eq)]
struct PagePlan {
    /// The period drawn on this page; `None` for the empty-report page
    period: Option<PeriodKey>,
    /// Record indices drawn on this page
    rows: Range<usize>,
    /// Whether this is the period's first page (summary panel is drawn)
    first: bool,
}

/// Split the filtered report into pages before drawing anything
fn plan_pages(filtered: &FilteredReport) -> Vec<PagePlan> {
    if filtered.is_empty() {
        return vec![PagePlan {
            period: None,
            rows: 0..0,
            first: true,
        }];
    }

    let mut plans = Vec::new();

    for (key, bucket) in filtered {
        let count = bucket.records.len();
        let mut start = 0;
        let mut first = true;

        loop {
            let capacity = if first { FIRST_PAGE_ROWS } else { CONT_PAGE_ROWS };
            let end = (start + capacity).min(count);
            plans.push(PagePlan {
                period: Some(*key),
                rows: start..end,
                first,
            });
            if end >= count {
                break;
            }
            start = end;
            first = false;
        }
    }

    plans
}

/// Write a filtered report as a paginated PDF document
pub fn export_document(
    filtered: &FilteredReport,
    kind: ReportKind,
    balances: &BTreeMap<PeriodKey, Money>,
    settings: &Settings,
    path: &Path,
) -> ClubResult<()> {
    let plans = plan_pages(filtered);

    let (doc, first_page, first_layer) =
        PdfDocument::new(kind.title(), Mm(PAGE_W as f32), Mm(PAGE_H as f32), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ClubError::Document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ClubError::Document(e.to_string()))?;

    let mut pages = vec![(first_page, first_layer)];
    for _ in 1..plans.len() {
        pages.push(doc.add_page(Mm(PAGE_W as f32), Mm(PAGE_H as f32), "Layer 1"));
    }

    let renderer = Renderer {
        regular,
        bold,
        kind,
        schema: schema(kind),
        settings,
        generated_at: Local::now().format(&settings.datetime_format).to_string(),
        range: range_label(filtered),
    };

    for (plan, (page_idx, layer_idx)) in plans.iter().zip(&pages) {
        let layer = doc.get_page(*page_idx).get_layer(*layer_idx);

        match plan.period {
            None => {
                renderer.draw_header(&layer, None);
                renderer.draw_empty_notice(&layer);
            }
            Some(key) => {
                let bucket = &filtered[&key];
                let period_label = format!("{}: {}", kind.period_prefix(), key);
                renderer.draw_header(&layer, Some(&period_label));

                let table_top = if plan.first {
                    renderer.draw_summary(&layer, &key, bucket, balances);
                    TABLE_TOP_FIRST
                } else {
                    TABLE_TOP_CONT
                };

                renderer.draw_table(&layer, bucket, plan.rows.clone(), table_top);
                if plan.first && bucket.records.is_empty() {
                    renderer.draw_no_records_line(&layer, table_top + TABLE_HEADER_H + 8.0);
                }
            }
        }
    }

    // Footers go on last: the total page count is unknown until every page
    // has been drawn.
    let total = pages.len();
    for (number, (page_idx, layer_idx)) in pages.iter().enumerate() {
        let layer = doc.get_page(*page_idx).get_layer(*layer_idx);
        renderer.draw_footer(&layer, number + 1, total);
    }

    save_atomic(doc, path)
}

/// Write the finished document via a temp file and rename
fn save_atomic(doc: PdfDocumentReference, path: &Path) -> ClubResult<()> {
    let tmp = path.with_extension("pdf.tmp");

    let file = File::create(&tmp)
        .map_err(|e| ClubError::Document(format!("Failed to create {}: {}", tmp.display(), e)))?;
    let mut writer = BufWriter::new(file);

    if let Err(err) = doc.save(&mut writer) {
        drop(writer);
        let _ = std::fs::remove_file(&tmp);
        return Err(ClubError::Document(err.to_string()));
    }

    std::fs::rename(&tmp, path)
        .map_err(|e| ClubError::Document(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

struct Renderer<'a> {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    kind: ReportKind,
    schema: TableSchema,
    settings: &'a Settings,
    generated_at: String,
    range: String,
}

impl Renderer<'_> {
    /// Positioned text; PDF paints glyphs with the current fill color
    #[allow(clippy::too_many_arguments)]
    fn text(
        &self,
        layer: &PdfLayerReference,
        content: &str,
        size: f64,
        x: f64,
        top: f64,
        font: &IndirectFontRef,
        color: Color,
    ) {
        layer.set_fill_color(color);
        layer.use_text(content, size as f32, Mm(x as f32), from_top(top), font);
    }

    /// Text right-aligned against `right_edge`
    #[allow(clippy::too_many_arguments)]
    fn text_right(
        &self,
        layer: &PdfLayerReference,
        content: &str,
        size: f64,
        right_edge: f64,
        top: f64,
        font: &IndirectFontRef,
        color: Color,
    ) {
        let x = right_edge - text_width_mm(content, size);
        self.text(layer, content, size, x, top, font, color);
    }

    fn fill_rect(&self, layer: &PdfLayerReference, x: f64, top: f64, w: f64, h: f64, color: Color) {
        layer.set_fill_color(color);
        let rect = Rect::new(Mm(x as f32), from_top(top + h), Mm((x + w) as f32), from_top(top))
            .with_mode(PaintMode::Fill);
        layer.add_rect(rect);
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_line(
        &self,
        layer: &PdfLayerReference,
        x1: f64,
        top1: f64,
        x2: f64,
        top2: f64,
        color: Color,
        thickness: f64,
    ) {
        layer.set_outline_color(color);
        layer.set_outline_thickness(thickness as f32);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1 as f32), from_top(top1)), false),
                (Point::new(Mm(x2 as f32), from_top(top2)), false),
            ],
            is_closed: false,
        });
    }

    /// Running page header: accent rule, brand mark and name, report title,
    /// generation timestamp, range label, and the current period label
    fn draw_header(&self, layer: &PdfLayerReference, period_label: Option<&str>) {
        let right = PAGE_W - MARGIN_X;

        self.stroke_line(layer, MARGIN_X, 8.0, right, 8.0, gold(), 2.5);

        // Brand mark: gold tile carrying the club initials
        self.fill_rect(layer, MARGIN_X, 11.0, 8.0, 8.0, gold());
        self.text(layer, "GS", 9.0, MARGIN_X + 1.4, 17.0, &self.bold, navy());

        let brand_x = MARGIN_X + 11.0;
        self.text(
            layer,
            &self.settings.brand_name,
            16.0,
            brand_x,
            17.5,
            &self.bold,
            gold(),
        );

        let title_x = brand_x + text_width_mm(&self.settings.brand_name, 16.0) + 6.0;
        self.text(layer, self.kind.title(), 9.0, title_x, 17.5, &self.regular, navy());

        let generated = format!("Generated: {}", self.generated_at);
        self.text_right(layer, &generated, 7.5, right, 13.0, &self.regular, text_light());
        let range = format!("Range: {}", self.range);
        self.text_right(layer, &range, 7.5, right, 17.5, &self.regular, text_light());

        if let Some(label) = period_label {
            self.text_right(layer, label, 8.5, right, 23.0, &self.bold, navy());
        }

        self.stroke_line(
            layer,
            MARGIN_X,
            HEADER_RULE_TOP,
            right,
            HEADER_RULE_TOP,
            rule_gray(),
            1.0,
        );
    }

    /// Running page footer with the back-patched total page count
    fn draw_footer(&self, layer: &PdfLayerReference, page: usize, total: usize) {
        let right = PAGE_W - MARGIN_X;

        self.stroke_line(
            layer,
            MARGIN_X,
            FOOTER_RULE_TOP,
            right,
            FOOTER_RULE_TOP,
            rule_gray(),
            1.0,
        );

        self.text(
            layer,
            &self.settings.footer_note,
            7.5,
            MARGIN_X,
            289.0,
            &self.regular,
            text_light(),
        );

        let page_str = format!("Page {} of {}", page, total);
        self.text_right(layer, &page_str, 7.5, right, 289.0, &self.regular, text_light());
    }

    /// Summary panel: shaded card, gold accent bar, vertical divider, labels
    /// left-aligned and values right-aligned at the two alignment anchors
    fn draw_summary(
        &self,
        layer: &PdfLayerReference,
        key: &PeriodKey,
        bucket: &PeriodBucket,
        balances: &BTreeMap<PeriodKey, Money>,
    ) {
        let card_w = PAGE_W - MARGIN_X * 2.0;
        let mid_x = MARGIN_X + card_w / 2.0;
        let right = PAGE_W - MARGIN_X;

        self.fill_rect(layer, MARGIN_X, SUMMARY_TOP, card_w, SUMMARY_H, card_bg());
        self.fill_rect(layer, MARGIN_X, SUMMARY_TOP, 2.2, SUMMARY_H, gold());
        self.stroke_line(
            layer,
            mid_x,
            SUMMARY_TOP + 4.0,
            mid_x,
            SUMMARY_TOP + SUMMARY_H - 4.0,
            rule_gray(),
            1.0,
        );

        let label_x = MARGIN_X + 7.0;
        let label2_x = mid_x + 7.0;
        let value_anchor = mid_x - 5.0;
        let value2_anchor = right - 5.0;

        let row1 = SUMMARY_TOP + 9.5;
        let row2 = SUMMARY_TOP + 17.0;
        let row3 = SUMMARY_TOP + 24.5;

        let label = |content: &str, x: f64, top: f64| {
            self.text(layer, content, 9.0, x, top, &self.regular, text_mid());
        };

        match self.kind {
            ReportKind::Financial => {
                label("Total Inflow", label_x, row1);
                label("Total Outflow / Loans", label_x, row2);
                label("Total Deposits", label_x, row3);
                label("Total Loan Payments", label2_x, row1);
                label("Total Loans", label2_x, row2);

                let totals = FlowTotals::resolve(bucket);
                self.value(layer, totals.inflow, value_anchor, row1);
                self.value(layer, totals.outflow, value_anchor, row2);
                self.value(layer, totals.deposits, value_anchor, row3);
                self.value(layer, totals.loan_payments, value2_anchor, row1);
                self.value(layer, totals.loans, value2_anchor, row2);
            }
            ReportKind::ClubFund => {
                label("Total Income", label_x, row1);
                // The balance stays on the left side of the divider
                label("Account Balance", label_x, row2);
                label("Total Expenses", label2_x, row1);

                let totals = FundTotals::resolve(bucket);
                let balance = balances.get(key).copied().unwrap_or_else(|| totals.net());
                self.value(layer, totals.income, value_anchor, row1);
                self.value(layer, balance, value_anchor, row2);
                self.value(layer, totals.expenses, value2_anchor, row1);
            }
        }
    }

    /// A summary value, bold navy, right-aligned at its anchor
    fn value(&self, layer: &PdfLayerReference, amount: Money, anchor: f64, top: f64) {
        self.text_right(layer, &amount.to_string(), 9.0, anchor, top, &self.bold, navy());
    }

    /// The line-item table: header band, alternating row shading, and a
    /// right-aligned amount column
    fn draw_table(
        &self,
        layer: &PdfLayerReference,
        bucket: &PeriodBucket,
        rows: Range<usize>,
        top: f64,
    ) {
        let table_w = PAGE_W - MARGIN_X * 2.0;
        debug_assert!(top + TABLE_HEADER_H + rows.len() as f64 * ROW_H <= CONTENT_BOTTOM);

        self.fill_rect(layer, MARGIN_X, top, table_w, TABLE_HEADER_H, navy());

        let white = rgb(1.0, 1.0, 1.0);
        let mut x = MARGIN_X;
        for (col, header) in self.schema.headers.iter().enumerate() {
            let col_w = self.schema.doc_widths[col] * table_w;
            if col == self.schema.amount_col {
                self.text_right(layer, header, 9.0, x + col_w - 2.0, top + 5.5, &self.bold, white.clone());
            } else {
                self.text(layer, header, 9.0, x + 2.0, top + 5.5, &self.bold, white.clone());
            }
            x += col_w;
        }

        let first_row = rows.start;
        for index in rows {
            let record = &bucket.records[index];
            let slot = index - first_row;
            let row_top = top + TABLE_HEADER_H + slot as f64 * ROW_H;

            if index % 2 == 1 {
                self.fill_rect(layer, MARGIN_X, row_top, table_w, ROW_H, card_bg());
            }

            let cells = record_cells(self.kind, record, self.settings, true);
            let mut x = MARGIN_X;
            for (col, cell) in cells.iter().enumerate() {
                let col_w = self.schema.doc_widths[col] * table_w;
                let max_chars = ((col_w - 4.0) / (8.5 * 0.5 * PT_TO_MM)).max(4.0) as usize;
                let content = truncate(cell, max_chars);

                if col == self.schema.amount_col {
                    self.text_right(
                        layer,
                        &content,
                        8.5,
                        x + col_w - 2.0,
                        row_top + 5.0,
                        &self.regular,
                        text_dark(),
                    );
                } else {
                    self.text(layer, &content, 8.5, x + 2.0, row_top + 5.0, &self.regular, text_dark());
                }
                x += col_w;
            }

            self.stroke_line(
                layer,
                MARGIN_X,
                row_top + ROW_H,
                MARGIN_X + table_w,
                row_top + ROW_H,
                rule_gray(),
                0.5,
            );
        }
    }

    /// Notice drawn when a period has no records
    fn draw_no_records_line(&self, layer: &PdfLayerReference, top: f64) {
        let notice = match self.kind {
            ReportKind::Financial => "No records for this month.",
            ReportKind::ClubFund => "No records for this year.",
        };
        self.text(layer, notice, 9.0, MARGIN_X, top, &self.regular, text_light());
    }

    /// Page body for an empty filtered report
    fn draw_empty_notice(&self, layer: &PdfLayerReference) {
        self.text(
            layer,
            "No records found for the selected range.",
            11.0,
            MARGIN_X,
            45.0,
            &self.regular,
            navy(),
        );
    }
}
