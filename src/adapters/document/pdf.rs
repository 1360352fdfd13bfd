//! PDF layout for care-plan documents via `printpdf`.
//!
//! A4 pages, built-in Helvetica. The built-in fonts only cover Latin-1, so
//! text passes through `pdf_safe` first: typographic dashes and bullets
//! become ASCII and pictograms are dropped.

use printpdf::*;
use std::io::BufWriter;

use crate::domain::patient::strip_flag_prefix;
use crate::ports::{CarePlanDocument, ExportError, ExportFormat};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const TOP: Mm = Mm(280.0);
const BOTTOM: f32 = 20.0;
const LEFT: Mm = Mm(20.0);
const INDENT: Mm = Mm(25.0);
const WRAP_CHARS: usize = 90;

/// Writes lines top to bottom, starting a new page when the current one fills.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, page: PdfPageIndex, layer: PdfLayerIndex) -> Self {
        Self {
            doc,
            layer: doc.get_page(page).get_layer(layer),
            y: TOP,
            pages: 1,
        }
    }

    fn ensure_room(&mut self, height: Mm) {
        if (self.y - height).0 < BOTTOM {
            self.pages += 1;
            let (page, layer) =
                self.doc
                    .add_page(PAGE_WIDTH, PAGE_HEIGHT, format!("Layer {}", self.pages));
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
    }

    fn line(&mut self, text: &str, size: f32, x: Mm, font: &IndirectFontRef, advance: Mm) {
        self.ensure_room(advance);
        self.layer.use_text(pdf_safe(text), size, x, self.y, font);
        self.y -= advance;
    }

    fn wrapped(&mut self, text: &str, size: f32, x: Mm, font: &IndirectFontRef) {
        for line in wrap_text(&pdf_safe(text), WRAP_CHARS) {
            self.line(&line, size, x, font, Mm(4.5));
        }
    }

    fn gap(&mut self, height: Mm) {
        self.y -= height;
    }
}

/// Lays out the document and returns the PDF bytes.
pub fn render_pdf(document: &CarePlanDocument) -> Result<Vec<u8>, ExportError> {
    let title = document.title();
    let (doc, page1, layer1) = PdfDocument::new(&title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::render(ExportFormat::Pdf, format!("PDF font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::render(ExportFormat::Pdf, format!("PDF font error: {e}")))?;

    {
        let mut page = PageWriter::new(&doc, page1, layer1);

        page.line(&title, 16.0, LEFT, &bold, Mm(10.0));

        for (label, value) in document.details() {
            page.wrapped(&format!("{}: {}", label, value), 9.0, LEFT, &font);
        }
        page.gap(Mm(4.0));

        page.line("LIFE CONTEXT", 11.0, LEFT, &bold, Mm(6.0));
        for (heading, answer) in &document.life_context {
            page.wrapped(&format!("{}: {}", heading, answer), 9.0, INDENT, &font);
        }
        page.gap(Mm(4.0));

        if !document.conflict_flags.is_empty() {
            page.line("CONFLICT FLAGS", 11.0, LEFT, &bold, Mm(6.0));
            for flag in &document.conflict_flags {
                page.wrapped(&flag_line(flag), 9.0, INDENT, &font);
            }
            page.gap(Mm(4.0));
        }

        page.line("ADAPTED CARE PLAN", 11.0, LEFT, &bold, Mm(7.0));
        for raw in document.care_plan.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                page.gap(Mm(3.0));
            } else if is_section_heading(trimmed) {
                page.line(trimmed, 10.0, LEFT, &bold, Mm(5.5));
            } else {
                page.wrapped(trimmed, 9.0, INDENT, &font);
            }
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::render(ExportFormat::Pdf, format!("PDF save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::render(ExportFormat::Pdf, format!("PDF buffer error: {e}")))
}

/// Flags print as bullets; the warning sign has no glyph in the built-in fonts.
fn flag_line(flag: &str) -> String {
    format!("- {}", strip_flag_prefix(flag))
}

/// Plan headings are upper-case once their pictogram is removed.
fn is_section_heading(line: &str) -> bool {
    let text = pdf_safe(line);
    let text = text.trim();
    !text.is_empty()
        && !text.starts_with('-')
        && text.chars().any(|c| c.is_ascii_alphabetic())
        && text
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

/// Maps text onto what the built-in fonts can draw.
fn pdf_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{26A0}' => out.push('!'),
            c if c.is_ascii() => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
