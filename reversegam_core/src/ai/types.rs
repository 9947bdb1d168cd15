use crate::engine::board::Board;
use crate::engine::types::{Square, Tile};

/// 着手候補を示す助言役。対局者の代わりに打つことはない。
pub trait Advisor {
    /// `tile` の手番で推奨するマスを返す。合法手が無ければ `None`。
    fn suggest(&mut self, board: &Board, tile: Tile) -> Option<Square>;
}
