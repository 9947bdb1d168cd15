use crate::engine::board::Board;
use crate::engine::types::{Cell, Direction, Square, Tile};
use thiserror::Error;

/// 着手によって裏返る相手の石の集合。空になることはない。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlipSet(
    /// 方向ごとに検出した順のマス。
    Vec<Square>,
);

/// 着手が不正である理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum IllegalMove {
    /// 1枚も裏返せない。
    #[error("move at {0} flips no tiles")]
    NoFlips(Square),
    /// すでに石が置かれている。
    #[error("square {0} is already occupied")]
    Occupied(Square),
    /// 盤外の座標。
    #[error("({col}, {row}) is off the board")]
    OutOfRange {
        /// 列。
        col: i8,
        /// 行。
        row: i8,
    },
}

impl FlipSet {
    /// 空かどうかを返す（合法手の `FlipSet` は空にならない）。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 裏返る石の数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 裏返るマスのスライスを返す。
    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }
}

/// 着手を検証し、成功すれば石を置いて裏返す。
///
/// 検証に失敗した場合は盤面を一切変更しない。
///
/// # Errors
///
/// 指定マスが `tile` の合法手でない場合、その理由を返す。
#[inline]
pub fn apply_move(board: &mut Board, tile: Tile, square: Square) -> Result<FlipSet, IllegalMove> {
    let flips = evaluate_square(board, tile, square)?;

    board.set(square, Cell::Occupied(tile));
    for flipped in flips.squares() {
        board.set(*flipped, Cell::Occupied(tile));
    }

    Ok(flips)
}

/// 座標 `(col, row)` に `tile` を置く手を検証し、裏返る石を返す。
///
/// 盤面は変更しない。
///
/// # Errors
///
/// - `IllegalMove::OutOfRange`: 盤外の座標
/// - `IllegalMove::Occupied`: 空きマスでない
/// - `IllegalMove::NoFlips`: どの方向にも挟める石がない
#[inline]
pub fn evaluate_move(board: &Board, tile: Tile, col: i8, row: i8) -> Result<FlipSet, IllegalMove> {
    if !Board::is_on_board(col, row) {
        return Err(IllegalMove::OutOfRange { col, row });
    }

    match Square::from_signed(col, row) {
        Some(square) => evaluate_square(board, tile, square),
        None => Err(IllegalMove::OutOfRange { col, row }),
    }
}

/// `evaluate_move` のマス指定版。
///
/// # Errors
///
/// 空きマスでない、または1枚も裏返せない場合にエラーを返す。
#[inline]
pub fn evaluate_square(board: &Board, tile: Tile, square: Square) -> Result<FlipSet, IllegalMove> {
    if board.get(square) != Cell::Empty {
        return Err(IllegalMove::Occupied(square));
    }

    let mut flips = Vec::new();
    for dir in Direction::ALL {
        flips_in_dir(board, tile, square, dir, &mut flips);
    }

    if flips.is_empty() {
        return Err(IllegalMove::NoFlips(square));
    }

    Ok(FlipSet(flips))
}

/// 1方向に相手の石をたどり、自分の石で挟めていれば `out` に追加する。
fn flips_in_dir(board: &Board, tile: Tile, start: Square, dir: Direction, out: &mut Vec<Square>) {
    let opponent = Cell::Occupied(tile.opponent());
    let mut run = Vec::new();
    let mut cursor = start.step(dir);

    while let Some(square) = cursor {
        let cell = board.get(square);
        if cell == opponent {
            run.push(square);
            cursor = square.step(dir);
            continue;
        }

        if cell == Cell::Occupied(tile) {
            out.append(&mut run);
        }
        return;
    }
}

/// `tile` に合法手が1つでもあるかを返す。
#[inline]
#[must_use]
pub fn has_legal_move(board: &Board, tile: Tile) -> bool {
    Square::iter_column_major().any(|square| evaluate_square(board, tile, square).is_ok())
}

/// `tile` の合法手を列優先の順で返す。
#[inline]
#[must_use]
pub fn legal_moves(board: &Board, tile: Tile) -> Vec<Square> {
    Square::iter_column_major()
        .filter(|square| evaluate_square(board, tile, *square).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{IllegalMove, apply_move, evaluate_move, evaluate_square, has_legal_move, legal_moves};
    use crate::engine::board::Board;
    use crate::engine::types::{Square, Tile};

    #[test]
    fn opening_move_flips_single_tile() {
        let board = Board::initial();
        let flips = evaluate_move(&board, Tile::Dark, 2, 3);
        assert_eq!(flips.as_ref().map(|set| set.squares().to_vec()), Ok(vec![Square::at(3, 3)]));

        let mut next = board;
        let applied = apply_move(&mut next, Tile::Dark, Square::at(2, 3));
        assert!(applied.is_ok());
        assert_eq!(next.count(Tile::Dark), 4);
        assert_eq!(next.count(Tile::Light), 1);
    }

    #[test]
    fn occupied_square_is_rejected_regardless_of_rays() {
        // (3,3) は白石。黒から見るとどの方向にも相手石があるが、空きでないため不正。
        let board = Board::initial();
        assert_eq!(
            evaluate_move(&board, Tile::Dark, 3, 3),
            Err(IllegalMove::Occupied(Square::at(3, 3)))
        );
        assert_eq!(
            evaluate_move(&board, Tile::Light, 4, 3),
            Err(IllegalMove::Occupied(Square::at(4, 3)))
        );
    }

    #[test]
    fn off_board_is_out_of_range() {
        let board = Board::initial();
        assert_eq!(
            evaluate_move(&board, Tile::Dark, -1, 4),
            Err(IllegalMove::OutOfRange { col: -1, row: 4 })
        );
        assert_eq!(
            evaluate_move(&board, Tile::Dark, 2, 8),
            Err(IllegalMove::OutOfRange { col: 2, row: 8 })
        );
    }

    #[test]
    fn run_ending_on_empty_or_edge_flips_nothing() {
        let board = Board::from_rows([
            "OOO.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        // 右端は空き、左端は盤外: どちらも挟めない。
        assert_eq!(
            evaluate_move(&board, Tile::Dark, 3, 0),
            Err(IllegalMove::NoFlips(Square::at(3, 0)))
        );
        assert!(!has_legal_move(&board, Tile::Dark));
    }

    #[test]
    fn flips_accumulate_across_directions() {
        let board = Board::from_rows([
            "X.X.X...",
            ".OOO....",
            "XO.OX...",
            ".OOO....",
            "X.X.X...",
            "........",
            "........",
            "........",
        ]);
        let flips = evaluate_move(&board, Tile::Dark, 2, 2);
        assert_eq!(flips.as_ref().map(super::FlipSet::len), Ok(8));

        let mut next = board;
        let before = next.score();
        let applied = apply_move(&mut next, Tile::Dark, Square::at(2, 2));
        assert_eq!(applied.map(|set| set.len()), Ok(8));

        let after = next.score();
        assert_eq!(Some(after.dark), before.dark.checked_add(9));
        assert_eq!(Some(after.light), before.light.checked_sub(8));
        assert_eq!(after.total().checked_add(next.count_empty()), Some(64));
    }

    #[test]
    fn long_run_to_the_far_edge() {
        let board = Board::from_rows([
            ".OOOOOOX",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        let flips = evaluate_move(&board, Tile::Dark, 0, 0);
        assert_eq!(flips.map(|set| set.len()), Ok(6));
    }

    #[test]
    fn illegal_apply_leaves_board_untouched() {
        let mut board = Board::initial();
        let before = board;
        assert!(apply_move(&mut board, Tile::Dark, Square::at(0, 0)).is_err());
        assert!(apply_move(&mut board, Tile::Dark, Square::at(3, 3)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn legal_moves_match_evaluate_move_everywhere() {
        let mut board = Board::initial();
        let mut tile = Tile::Dark;

        // 数手進めた局面でも健全性と完全性が成り立つことを確認する。
        for _ply in 0_u8..12 {
            for side in [Tile::Dark, Tile::Light] {
                let moves = legal_moves(&board, side);
                for square in Square::iter_column_major() {
                    let legal = evaluate_square(&board, side, square).is_ok();
                    assert_eq!(moves.contains(&square), legal, "{square} for {side:?}");
                }
            }

            let Some(first) = legal_moves(&board, tile).first().copied() else {
                break;
            };
            assert!(apply_move(&mut board, tile, first).is_ok());
            tile = tile.opponent();
        }
    }

    #[test]
    fn opening_moves_in_column_major_order() {
        let moves = legal_moves(&Board::initial(), Tile::Dark);
        assert_eq!(moves, vec![Square::at(2, 3), Square::at(3, 2), Square::at(4, 5), Square::at(5, 4)]);
    }
}
