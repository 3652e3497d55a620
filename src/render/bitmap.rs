//! Police bitmap 5×7 intégrée, utilisée quand aucune police vectorielle n'est
//! disponible. Couvre chiffres, majuscules latines et ponctuation de base ; le
//! cyrillique est translittéré, le reste devient `?`.

use super::types::{Align, TextOp};
use image::{Rgb, RgbImage};

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Avance horizontale d'un glyphe (colonne d'espacement incluse).
const ADVANCE: u32 = GLYPH_W + 1;

pub(super) fn draw(canvas: &mut RgbImage, ops: &[TextOp]) {
    let width = canvas.width();
    for op in ops {
        let glyphs = normalize(&op.text);
        let scale = scale_for(op.size);
        let x0 = match op.align {
            Align::Center => width.saturating_sub(text_width(glyphs.len(), scale)) / 2,
            Align::Left(x) => x,
        };
        for (i, ch) in glyphs.iter().enumerate() {
            let Some(rows) = glyph(*ch) else { continue };
            let gx = x0 + i as u32 * ADVANCE * scale;
            for (row, bits) in (0u32..).zip(rows) {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                        fill_block(canvas, gx + col * scale, op.top + row * scale, scale);
                    }
                }
            }
        }
    }
}

/// Facteur d'agrandissement pour une taille de police donnée.
fn scale_for(size: f32) -> u32 {
    ((size / (GLYPH_H + 1) as f32) as u32).max(1)
}

fn text_width(glyph_count: usize, scale: u32) -> u32 {
    match glyph_count as u32 {
        0 => 0,
        n => (n * ADVANCE - 1) * scale,
    }
}

fn fill_block(canvas: &mut RgbImage, x: u32, y: u32, scale: u32) {
    for dy in 0..scale {
        for dx in 0..scale {
            if let Some(px) = canvas.get_pixel_mut_checked(x + dx, y + dy) {
                *px = Rgb([0, 0, 0]);
            }
        }
    }
}

fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(latin) = transliterate(ch) {
            out.extend(latin.chars());
            continue;
        }
        let ch = match ch {
            '—' | '–' => '-',
            c => c.to_ascii_uppercase(),
        };
        out.push(if glyph(ch).is_some() { ch } else { '?' });
    }
    out
}

fn transliterate(ch: char) -> Option<&'static str> {
    let lower = ch.to_lowercase().next()?;
    let latin = match lower {
        'а' => "A",
        'б' => "B",
        'в' => "V",
        'г' => "G",
        'д' => "D",
        'е' | 'ё' | 'э' => "E",
        'ж' => "ZH",
        'з' => "Z",
        'и' => "I",
        'й' | 'ы' => "Y",
        'к' => "K",
        'л' => "L",
        'м' => "M",
        'н' => "N",
        'о' => "O",
        'п' => "P",
        'р' => "R",
        'с' => "S",
        'т' => "T",
        'у' => "U",
        'ф' => "F",
        'х' => "KH",
        'ц' => "TS",
        'ч' => "CH",
        'ш' => "SH",
        'щ' => "SHCH",
        'ъ' | 'ь' => "",
        'ю' => "YU",
        'я' => "YA",
        _ => return None,
    };
    Some(latin)
}

/// Lignes du glyphe, bit 4 = colonne de gauche.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        _ => return None,
    };
    Some(rows)
}
