//! Block-glyph font for the large clock face

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 5;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        '.' => [" ", " ", " ", " ", "█"],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as rows of block glyphs, one column of space between glyphs
///
/// Characters without a glyph are skipped.
pub fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for (i, rows_for_char) in text.chars().filter_map(glyph).enumerate() {
        for (row, part) in rows.iter_mut().zip(rows_for_char) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

/// Display width in cells of `big_text(text)`
pub fn big_text_width(text: &str) -> usize {
    big_text(text)
        .first()
        .map(|row| row.chars().count())
        .unwrap_or(0)
}
