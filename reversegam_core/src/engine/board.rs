use crate::engine::types::{Cell, Square, Tile};

/// 盤の一辺の長さ（符号付き座標用）。
const BOARD_LEN_SIGNED: i8 = 8;

/// 8x8 の盤面。`Copy` で複製すると独立した盤面になる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// `Square::index()` で引くマスの状態。
    cells: [Cell; Square::COUNT],
}

/// 石数（盤面全体の走査で求める）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub struct Score {
    /// 黒石の数。
    pub dark: u32,
    /// 白石の数。
    pub light: u32,
}

/// 勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// 引き分け。
    Draw,
    /// `winner` が `margin` 石差で勝利。
    Win {
        /// 石差。
        margin: u32,
        /// 勝者の石。
        winner: Tile,
    },
}

impl Board {
    /// 指定座標のマスを返す。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn at(&self, col: i8, row: i8) -> Option<Cell> {
        Square::from_signed(col, row).map(|square| self.get(square))
    }

    /// 指定の石の数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, tile: Tile) -> u32 {
        self.count_cells(Cell::Occupied(tile))
    }

    /// 指定状態のマス数を数える。
    fn count_cells(&self, cell: Cell) -> u32 {
        let count = self.cells.iter().filter(|value| **value == cell).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub fn count_empty(&self) -> u32 {
        self.count_cells(Cell::Empty)
    }

    /// 全マス空きの盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; Square::COUNT],
        }
    }

    /// 行ごとの文字列（`X`=黒、`O`=白、それ以外=空き）から盤面を作る（テスト用）。
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_rows(rows: [&str; 8]) -> Self {
        let mut board = Self::empty();
        for (row, line) in (0_u8..).zip(rows) {
            for (col, ch) in (0_u8..).zip(line.chars()) {
                let cell = match ch {
                    'X' => Cell::Occupied(Tile::Dark),
                    'O' => Cell::Occupied(Tile::Light),
                    _ => Cell::Empty,
                };
                if let Some(square) = Square::from_col_row(col, row) {
                    board.set(square, cell);
                }
            }
        }
        board
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells
            .get(square.to_usize())
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// 初期配置を返す。
    ///
    /// 中央 2x2 のうち (3,3) と (4,4) に白、(3,4) と (4,3) に黒を置く。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, row, tile) in [
            (3, 3, Tile::Light),
            (3, 4, Tile::Dark),
            (4, 3, Tile::Dark),
            (4, 4, Tile::Light),
        ] {
            if let Some(square) = Square::from_col_row(col, row) {
                board.set(square, Cell::Occupied(tile));
            }
        }
        board
    }

    /// 座標が盤内（両方とも 0..8）かどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_on_board(col: i8, row: i8) -> bool {
        col >= 0 && col < BOARD_LEN_SIGNED && row >= 0 && row < BOARD_LEN_SIGNED
    }

    /// 現在の石数を返す。
    #[inline]
    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            dark: self.count(Tile::Dark),
            light: self.count(Tile::Light),
        }
    }

    /// 指定マスの状態を書き換える。
    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(square.to_usize()) {
            *slot = cell;
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Score {
    /// 指定の石の数を返す。
    #[inline]
    #[must_use]
    pub const fn get(self, tile: Tile) -> u32 {
        match tile {
            Tile::Dark => self.dark,
            Tile::Light => self.light,
        }
    }

    /// 黒・白の石数から作る。
    #[inline]
    #[must_use]
    pub const fn new(dark: u32, light: u32) -> Self {
        Self { dark, light }
    }

    /// 石数から勝敗を決める。
    #[inline]
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        if self.dark > self.light {
            Outcome::Win {
                margin: self.dark.saturating_sub(self.light),
                winner: Tile::Dark,
            }
        } else if self.light > self.dark {
            Outcome::Win {
                margin: self.light.saturating_sub(self.dark),
                winner: Tile::Light,
            }
        } else {
            Outcome::Draw
        }
    }

    /// 盤上の石の合計を返す。
    #[inline]
    #[must_use]
    pub const fn total(self) -> u32 {
        self.dark.saturating_add(self.light)
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Outcome, Score};
    use crate::engine::types::{Cell, Square, Tile};

    #[test]
    fn initial_layout_has_opposite_diagonals() {
        let board = Board::initial();
        assert_eq!(board.get(Square::at(3, 3)), Cell::Occupied(Tile::Light));
        assert_eq!(board.get(Square::at(4, 4)), Cell::Occupied(Tile::Light));
        assert_eq!(board.get(Square::at(3, 4)), Cell::Occupied(Tile::Dark));
        assert_eq!(board.get(Square::at(4, 3)), Cell::Occupied(Tile::Dark));
        assert_eq!(board.score(), Score::new(2, 2));
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn copy_is_independent() {
        let source = Board::initial();
        let mut copy = source;
        copy.set(Square::at(0, 0), Cell::Occupied(Tile::Dark));
        assert_eq!(source.get(Square::at(0, 0)), Cell::Empty);
        assert_eq!(copy.get(Square::at(0, 0)), Cell::Occupied(Tile::Dark));
        assert_ne!(source, copy);
    }

    #[test]
    fn is_on_board_checks_both_coordinates() {
        assert!(Board::is_on_board(0, 0));
        assert!(Board::is_on_board(7, 7));
        assert!(!Board::is_on_board(-1, 3));
        assert!(!Board::is_on_board(3, 8));
        assert_eq!(Board::initial().at(8, 0), None);
        assert_eq!(Board::initial().at(3, 3), Some(Cell::Occupied(Tile::Light)));
    }

    #[test]
    fn outcome_reports_margin() {
        let score = Score::new(40, 24);
        assert_eq!(
            score.outcome(),
            Outcome::Win {
                margin: 16,
                winner: Tile::Dark
            }
        );
        assert_eq!(Score::new(32, 32).outcome(), Outcome::Draw);
        assert_eq!(score.get(Tile::Light), 24);
        assert_eq!(score.total(), 64);
    }
}
