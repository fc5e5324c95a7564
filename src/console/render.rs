//! Text rendering of the board.

use tictactoe_rules::{Board, Cell};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders `board` as a grid with 1-based row and column labels.
///
/// Empty cells are blank. Every cell is padded to the widest symbol on the
/// board, so double-width symbols keep the columns aligned.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let width = board.rows().flatten().map(cell_width).max().unwrap_or(1).max(1);
    let label_width = size.to_string().len();

    let rule = format!(
        "{}{}\n",
        " ".repeat(label_width + 1),
        "-".repeat(size * (width + 3) + 1)
    );

    let header: Vec<String> = (1..=size).map(|col| pad(&col.to_string(), width)).collect();
    let mut out = format!(
        "\n{}{}\n",
        " ".repeat(label_width + 3),
        header.join("   ").trim_end()
    );
    out.push_str(&rule);

    for (i, row) in board.rows().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| pad(&cell_text(c), width)).collect();
        out.push_str(&format!("{:>label_width$} | {} |\n", i + 1, cells.join(" | ")));
        out.push_str(&rule);
    }

    out
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => " ".to_string(),
        Cell::Occupied(symbol) => symbol.to_string(),
    }
}

fn cell_width(cell: &Cell) -> usize {
    match cell {
        Cell::Empty => 1,
        Cell::Occupied(symbol) => symbol.as_char().width().unwrap_or(1),
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::Symbol;

    #[test]
    fn test_empty_board_layout() {
        let rendered = render_board(&Board::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "    1   2   3");
        assert_eq!(lines[2], "  -------------");
        assert_eq!(lines[3], "1 |   |   |   |");
        assert_eq!(lines.len(), 3 + 2 * 3);
    }

    #[test]
    fn test_symbols_rendered_in_place() {
        let mut board = Board::default();
        board.place(0, 0, Symbol::new('X').unwrap());
        board.place(2, 1, Symbol::new('O').unwrap());
        let rendered = render_board(&board);
        assert!(rendered.contains("1 | X |   |   |"));
        assert!(rendered.contains("3 |   | O |   |"));
    }

    #[test]
    fn test_wide_symbols_keep_alignment() {
        let mut board = Board::default();
        board.place(1, 1, Symbol::new('🔥').unwrap());
        board.place(0, 0, Symbol::new('X').unwrap());
        let rendered = render_board(&board);
        let widths: Vec<usize> = rendered
            .lines()
            .filter(|l| l.contains('|'))
            .map(UnicodeWidthStr::width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.contains("2 |    | 🔥 |    |"));
    }
}
