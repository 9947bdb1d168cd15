use crate::ai::types::Advisor;
use crate::engine::board::Board;
use crate::engine::rules;
use crate::engine::types::{Square, Tile};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;
use rand::{Rng, SeedableRng as _};

/// 1手先読みの助言役。
///
/// 1. 角に打てるなら、角の合法手から乱数で1つ選ぶ。
/// 2. そうでなければ、打った後の自分の石数が最大になる手を選ぶ（同数なら列挙順で先の手）。
#[derive(Debug)]
pub struct Suggester<R> {
    /// 角の選択に使う乱数生成器。
    rng: R,
}

impl<R: Rng> Suggester<R> {
    /// 乱数生成器を注入して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Suggester<StdRng> {
    /// `seed` から決定的な乱数生成器を作って初期化する。
    #[inline]
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Advisor for Suggester<R> {
    #[inline]
    fn suggest(&mut self, board: &Board, tile: Tile) -> Option<Square> {
        let moves = rules::legal_moves(board, tile);
        if moves.is_empty() {
            return None;
        }

        let corners: Vec<Square> = moves.iter().copied().filter(|square| square.is_corner()).collect();
        if let Some(corner) = corners.choose(&mut self.rng) {
            return Some(*corner);
        }

        greedy(board, tile, &moves)
    }
}

/// 各合法手を盤面のコピーで試し、自分の石数が最大になる手を返す。
fn greedy(board: &Board, tile: Tile, moves: &[Square]) -> Option<Square> {
    let mut best: Option<(Square, u32)> = None;

    for square in moves.iter().copied() {
        let mut trial = *board;
        if rules::apply_move(&mut trial, tile, square).is_err() {
            continue;
        }

        let count = trial.count(tile);
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((square, count));
        }
    }

    best.map(|(square, _)| square)
}
