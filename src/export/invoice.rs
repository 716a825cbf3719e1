use crate::core::models::SettlementEntry;
use crate::export::qr::embeddable;
use crate::export::summary::settlement_line;
use std::borrow::Cow;
use std::fmt::Write;

// A4 in points, origin at the bottom-left like a PDF page.
pub const PAGE_WIDTH: i32 = 595;
pub const PAGE_HEIGHT: i32 = 842;

const TITLE: &str = "Settlement Invoice";
const TITLE_Y: i32 = 800;
const FIRST_LINE_Y: i32 = 770;
const CONTINUATION_LINE_Y: i32 = 800;
const LINE_HEIGHT: i32 = 20;
const BOTTOM_MARGIN: i32 = 100;
const LEFT_MARGIN: i32 = 50;

const QR_X: i32 = 380;
const QR_Y: i32 = 650;
const QR_SIZE: i32 = 150;
const QR_CAPTION: &str = "Scan to share";
const QR_CAPTION_Y: i32 = 630;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceLine {
    /// Baseline height measured from the bottom of the page.
    pub y: i32,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoicePage {
    pub lines: Vec<InvoiceLine>,
}

/// Splits settlement lines across pages.
///
/// The first page starts below the title; every later page starts at the
/// top. A page break happens as soon as the next baseline would fall under
/// the bottom margin, so a list that exactly fills a page leaves an empty
/// trailing page (which still carries the QR code).
pub fn paginate(settlements: &[SettlementEntry]) -> Vec<InvoicePage> {
    let mut pages = vec![InvoicePage::default()];
    let mut y = FIRST_LINE_Y;

    for entry in settlements {
        if let Some(page) = pages.last_mut() {
            page.lines.push(InvoiceLine {
                y,
                text: settlement_line(entry),
            });
        }
        y -= LINE_HEIGHT;
        if y < BOTTOM_MARGIN {
            pages.push(InvoicePage::default());
            y = CONTINUATION_LINE_Y;
        }
    }

    pages
}

/// Lays out the invoice as one SVG with the A4 pages stacked top to bottom.
///
/// `qr_svg` is an externally rendered image placed on the last page.
pub fn render_invoice_svg(settlements: &[SettlementEntry], qr_svg: &str) -> String {
    let pages = paginate(settlements);
    let total_height = PAGE_HEIGHT * pages.len() as i32;

    let mut svg = String::with_capacity(4096);
    let _ = writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{PAGE_WIDTH}" height="{total_height}" viewBox="0 0 {PAGE_WIDTH} {total_height}">"#
    );
    let _ = writeln!(
        &mut svg,
        r#"<style>text {{ font-family: {FONT_FAMILY}; font-size: 12px; }} .title {{ font-size: 16px; font-weight: bold; }}</style>"#
    );

    let last = pages.len() - 1;
    for (index, page) in pages.iter().enumerate() {
        let offset = PAGE_HEIGHT * index as i32;
        let _ = writeln!(&mut svg, r#"<g transform="translate(0 {offset})">"#);
        let _ = writeln!(
            &mut svg,
            r##"<rect width="{PAGE_WIDTH}" height="{PAGE_HEIGHT}" fill="#ffffff" stroke="#cbd5e0" />"##
        );

        if index == 0 {
            let _ = writeln!(
                &mut svg,
                r#"<text class="title" x="{LEFT_MARGIN}" y="{}">{TITLE}</text>"#,
                to_svg_y(TITLE_Y)
            );
        }

        for line in &page.lines {
            let _ = writeln!(
                &mut svg,
                r#"<text x="{LEFT_MARGIN}" y="{}">{}</text>"#,
                to_svg_y(line.y),
                escape_xml(&line.text)
            );
        }

        if index == last {
            let scale = intrinsic_width(qr_svg)
                .filter(|width| *width > 0.0)
                .map_or(1.0, |width| f64::from(QR_SIZE) / width);
            let _ = writeln!(
                &mut svg,
                r#"<g transform="translate({QR_X} {}) scale({scale:.4})">"#,
                to_svg_y(QR_Y + QR_SIZE)
            );
            svg.push_str(embeddable(qr_svg));
            svg.push_str("\n</g>\n");
            let _ = writeln!(
                &mut svg,
                r#"<text x="{QR_X}" y="{}">{QR_CAPTION}</text>"#,
                to_svg_y(QR_CAPTION_Y)
            );
        }

        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>");
    svg
}

fn intrinsic_width(svg_document: &str) -> Option<f64> {
    let root = embeddable(svg_document);
    let start = root.find("width=\"")? + "width=\"".len();
    let end = start + root[start..].find('"')?;
    root[start..end].trim_end_matches("px").parse().ok()
}

fn to_svg_y(y: i32) -> i32 {
    PAGE_HEIGHT - y
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
