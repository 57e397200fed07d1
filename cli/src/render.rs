use sapper_core::{Board, BoardConfig, Coord2, Sign};

/// Lays the grid out with column letters across the top and 1-based row
/// numbers down the side, matching the move syntax `parse_position` accepts.
pub fn draw(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..board.col_count() {
        out.push((b'a' + col) as char);
        out.push(' ');
    }
    out.push('\n');

    for row in 0..board.row_count() {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..board.col_count() {
            let sign = board
                .sign_at((row, col))
                .expect("grid iteration stays in bounds");
            out.push_str(&glyph(sign));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

fn glyph(sign: Sign) -> String {
    match sign {
        Sign::Flag => "⚑".into(),
        Sign::Closed => "□".into(),
        Sign::Mine => "☼".into(),
        Sign::Blank => "■".into(),
        Sign::Number(count) => count.to_string(),
    }
}

/// Parses a move like `a1`: column letter first, then the 1-based row number.
pub fn parse_position(input: &str, config: BoardConfig) -> Result<Coord2, String> {
    let input = input.trim();
    let mut chars = input.chars();

    let Some(letter) = chars.next() else {
        return Err("enter a column letter followed by a row number, e.g. a1".into());
    };
    let col = match letter.to_ascii_lowercase() {
        letter @ 'a'..='z' => letter as u8 - b'a',
        _ => return Err(format!("{letter:?} is not a column letter")),
    };

    let rest = chars.as_str();
    let row: u8 = rest
        .parse()
        .map_err(|_| format!("{rest:?} is not a row number"))?;

    if row == 0 || row > config.rows || col >= config.cols {
        return Err(format!(
            "{input:?} is outside the {} x {} grid",
            config.rows, config.cols
        ));
    }
    Ok((row - 1, col))
}
