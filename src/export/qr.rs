use crate::core::errors::ClearLedgerError;
use crate::core::models::SettlementEntry;
use crate::export::summary::settlements_text;
use qrcode::QrCode;
use qrcode::render::svg;
use tracing::{debug, error};

const QR_MIN_SIZE: u32 = 200;

/// Encodes the settlement summary as a QR code and renders it to SVG.
pub fn settlement_qr_svg(settlements: &[SettlementEntry]) -> Result<String, ClearLedgerError> {
    let payload = settlements_text(settlements);
    let code = QrCode::new(payload.as_bytes()).map_err(|e| {
        error!("QR encoding failed for {} bytes: {}", payload.len(), e);
        ClearLedgerError::RenderError(format!("Failed to encode QR code: {}", e))
    })?;

    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    debug!("Rendered QR code for {} settlements", settlements.len());
    Ok(image)
}

/// Strips any XML prolog so the SVG can be nested inside another document.
pub fn embeddable(svg_document: &str) -> &str {
    svg_document
        .find("<svg")
        .map(|start| &svg_document[start..])
        .unwrap_or(svg_document)
}
