//! 盤面・石数・最終結果の文字列化。

use colored::Colorize as _;
use reversegam_core::engine::{Board, Cell, Score, Square, Tile};
use reversegam_core::session::{FinalReport, MatchConfig, MatchResult, Seat};

/// 列番号の見出し。
const COLUMN_HEADER: &str = "  12345678";
/// 盤の上下の枠。
const FRAME: &str = " +--------+";

/// 行番号と列番号付きの枠で盤面を描く（末尾に改行は付けない）。
///
/// `hints` があれば、その空きマスを `.` で示す。
pub fn board_text(board: &Board, hints: Option<&[Square]>) -> String {
    let mut lines = vec![COLUMN_HEADER.to_owned(), FRAME.to_owned()];

    for row in 0..Square::BOARD_LEN {
        let label = row.saturating_add(1);
        let cells: String = (0..Square::BOARD_LEN)
            .filter_map(|col| Square::from_col_row(col, row))
            .map(|square| cell_text(board.get(square), hints.is_some_and(|moves| moves.contains(&square))))
            .collect();
        lines.push(format!("{label}|{cells}|{label}"));
    }

    lines.push(FRAME.to_owned());
    lines.push(COLUMN_HEADER.to_owned());
    lines.join("\n")
}

/// 1マス分の表示。
fn cell_text(cell: Cell, is_hint: bool) -> String {
    match cell {
        Cell::Occupied(Tile::Dark) => Tile::Dark.to_string().bright_green().to_string(),
        Cell::Occupied(Tile::Light) => Tile::Light.to_string().bright_yellow().to_string(),
        _ if is_hint => ".".bright_cyan().to_string(),
        _ => " ".to_owned(),
    }
}

/// 終局時の石数と勝者の告知。
pub fn final_text(config: &MatchConfig, report: &FinalReport) -> String {
    let totals = format!(
        "{} scored {} points; {} scored {} points.",
        Tile::Dark,
        report.score.dark,
        Tile::Light,
        report.score.light
    );

    let verdict = match report.result {
        MatchResult::Win { margin, winner } => {
            let loser = match winner {
                Seat::Player1 => Seat::Player2,
                _ => Seat::Player1,
            };
            format!(
                "{} wins, beating {} by {margin} points!",
                config.name(winner),
                config.name(loser)
            )
            .bright_green()
            .to_string()
        }
        _ => "It's a draw!".bright_cyan().to_string(),
    };

    format!("{totals}\n{verdict}")
}

/// 両対局者の名前・石・石数を1行で示す。
pub fn score_line(config: &MatchConfig, score: Score) -> String {
    let part = |seat: Seat| {
        let tile = config.tile(seat);
        format!("{}({tile}): {} points.", config.name(seat), score.get(tile))
    };
    format!("{} {}", part(Seat::Player1), part(Seat::Player2))
}
