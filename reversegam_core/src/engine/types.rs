use core::fmt;

/// 石の種類（プレイヤーが受け持つ色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Tile {
    /// 黒石。
    Dark,
    /// 白石。
    Light,
}

impl Tile {
    /// 相手側の石を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// 盤面表示に用いる記号を返す。
    ///
    /// 初期配置は (3,3)/(4,4) が白なので、開始盤面では左上から右下への対角に `O` が並ぶ。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dark => 'X',
            Self::Light => 'O',
        }
    }
}

impl fmt::Display for Tile {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 空きマス。
    #[default]
    Empty,
    /// 石が置かれている。
    Occupied(Tile),
}

/// 8方向の単位ベクトル。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Direction {
    /// 列方向の増分。
    dx: i8,
    /// 行方向の増分。
    dy: i8,
}

impl Direction {
    /// `(0, 0)` を除く8方向。
    pub const ALL: [Self; 8] = [
        Self { dx: 0, dy: 1 },
        Self { dx: 1, dy: 1 },
        Self { dx: 1, dy: 0 },
        Self { dx: 1, dy: -1 },
        Self { dx: 0, dy: -1 },
        Self { dx: -1, dy: -1 },
        Self { dx: -1, dy: 0 },
        Self { dx: -1, dy: 1 },
    ];
}

/// 盤面上のマス（0..=63のインデックス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 盤面のマス数。
    pub const COUNT: usize = 64;

    /// 列・行から `Square` を生成する（テスト用）。盤外なら (0,0) を返す。
    #[cfg(test)]
    #[must_use]
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        match Self::from_col_row(col, row) {
            Some(value) => value,
            None => Self(u8::MIN),
        }
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 列・行から `Square` を生成する。盤外なら `None`。
    #[inline]
    #[must_use]
    pub const fn from_col_row(col: u8, row: u8) -> Option<Self> {
        if col >= Self::BOARD_LEN || row >= Self::BOARD_LEN {
            return None;
        }

        let idx = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match idx.checked_add(col) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 符号付き座標から `Square` を生成する。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn from_signed(col: i8, row: i8) -> Option<Self> {
        let col_u8 = u8::try_from(col).ok()?;
        let row_u8 = u8::try_from(row).ok()?;
        Self::from_col_row(col_u8, row_u8)
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 4隅のいずれかかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        let last = Self::BOARD_LEN.saturating_sub(1);
        let col = self.col();
        let row = self.row();
        (col == 0 || col == last) && (row == 0 || row == last)
    }

    /// 列優先（列が外側、行が内側）で全マスを列挙する。
    #[inline]
    pub fn iter_column_major() -> impl Iterator<Item = Self> {
        (0..Self::BOARD_LEN)
            .flat_map(|col| (0..Self::BOARD_LEN).filter_map(move |row| Self::from_col_row(col, row)))
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// 指定方向へ1マス進んだマスを返す。盤外に出たら `None`。
    #[inline]
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let col = self.col().checked_add_signed(dir.dx)?;
        let row = self.row().checked_add_signed(dir.dy)?;
        Self::from_col_row(col, row)
    }

    /// `usize` のインデックスを返す（配列アクセス用）。
    #[inline]
    #[must_use]
    pub(crate) fn to_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Square {
    /// 入力形式と同じ1始まりの「列・行」2桁で表示する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.col().saturating_add(1),
            self.row().saturating_add(1)
        )
    }
}
