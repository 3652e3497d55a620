use super::types::{Align, RenderError, TextOp};
use image::RgbImage;
use resvg::tiny_skia;
use std::sync::Arc;
use usvg::fontdb;

/// Hauteur de l'ascendante en fraction de la taille : `top` désigne le haut de
/// la ligne, SVG place le texte sur sa ligne de base.
const ASCENT: f32 = 0.9;

/// Dessine `ops` avec une police vectorielle : calque SVG rastérisé par resvg
/// puis composé sur le canevas.
pub(super) fn draw(
    canvas: &mut RgbImage,
    ops: &[TextOp],
    db: &Arc<fontdb::Database>,
    family: &str,
) -> Result<(), RenderError> {
    let (width, height) = canvas.dimensions();
    let doc = overlay_document(width, height, ops, family);
    let opts = usvg::Options {
        fontdb: Arc::clone(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&doc, &opts)?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    composite(canvas, pixmap.data());
    Ok(())
}

fn overlay_document(width: u32, height: u32, ops: &[TextOp], family: &str) -> String {
    let family = family.replace('\'', "");
    let mut doc = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for op in ops {
        let baseline = op.top + (op.size * ASCENT).round() as u32;
        let (x, anchor) = match op.align {
            Align::Center => (width as f32 / 2.0, "middle"),
            Align::Left(x) => (x as f32, "start"),
        };
        doc.push_str(&format!(
            r#"<text x="{x}" y="{baseline}" font-family="'{family}', sans-serif" font-size="{size}" fill="black" text-anchor="{anchor}" xml:space="preserve">{text}</text>"#,
            family = escape_xml(&family),
            size = op.size,
            text = escape_xml(&op.text),
        ));
    }
    doc.push_str("</svg>");
    doc
}

/// Échappe le balisage ; les caractères interdits en XML 1.0 (contrôles C0
/// hors tabulation/LF/CR, U+FFFE, U+FFFF) deviennent `?`, comme en bitmap.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(ch),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => out.push('?'),
            _ => out.push(ch),
        }
    }
    out
}

/// Compose un RGBA prémultiplié sur un canevas opaque.
fn composite(canvas: &mut RgbImage, premul_rgba: &[u8]) {
    for (dst, src) in canvas.pixels_mut().zip(premul_rgba.chunks_exact(4)) {
        let inv = 255 - u16::from(src[3]);
        for c in 0..3 {
            let blended = u16::from(src[c]) + (u16::from(dst.0[c]) * inv + 127) / 255;
            dst.0[c] = blended.min(255) as u8;
        }
    }
}
