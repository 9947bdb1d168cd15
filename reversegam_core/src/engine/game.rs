use crate::engine::board::{Board, Score};
use crate::engine::rules::{self, FlipSet, IllegalMove};
use crate::engine::types::{Square, Tile};
use thiserror::Error;
use tracing::debug;

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方とも合法手なし）。
    GameOver {
        /// 最終盤面の石数。
        score: Score,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用（打つ/パス）に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("the game is already over")]
    GameOver,
    /// 指定マスが合法手ではない。
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
    /// 合法手があるのにパスしようとした。
    #[error("cannot pass while a legal move exists")]
    PassNotAllowed,
}

/// 1ゲームの進行を管理する構造体。盤面はこの構造体だけが書き換える。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 手番の石。
    turn: Tile,
}

impl Game {
    /// 現手番に合法手が無い場合、パスを自動適用する。
    ///
    /// - すでに終局している場合は何もしない（`false`）。
    /// - 合法手がある場合は何もしない（`false`）。
    /// - パスを適用できた場合は `true`。
    #[inline]
    pub fn auto_pass_if_needed(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        if rules::has_legal_move(&self.board, self.turn) {
            return false;
        }

        self.pass().is_ok()
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面と手番からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn from_board(board: Board, turn: Tile) -> Self {
        Self { board, turn }
    }

    /// 終局しているかどうかを返す。
    ///
    /// 双方に合法手が無いことだけが終局条件で、盤面が埋まった場合もこれに含まれる。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !rules::has_legal_move(&self.board, self.turn)
            && !rules::has_legal_move(&self.board, self.turn.opponent())
    }

    /// 現手番の合法手を返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Square> {
        rules::legal_moves(&self.board, self.turn)
    }

    /// 初期局面から `first` の手番でゲームを開始する。
    #[inline]
    #[must_use]
    pub fn new(first: Tile) -> Self {
        Self {
            board: Board::initial(),
            turn: first,
        }
    }

    /// パス（手番交代）を適用する。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでに終局している場合
    /// - `PlayError::PassNotAllowed`: 合法手が存在する場合
    #[inline]
    pub fn pass(&mut self) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if rules::has_legal_move(&self.board, self.turn) {
            return Err(PlayError::PassNotAllowed);
        }

        debug!(tile = ?self.turn, "no legal move, turn skipped");
        self.turn = self.turn.opponent();
        Ok(self.status())
    }

    /// 手番側の石を `square` に打つ。
    ///
    /// 合法手であれば石を置き、挟んだ石を裏返して手番を交代する。
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver`: すでに終局している場合
    /// - `PlayError::Illegal`: 指定マスが合法手でない場合（盤面は変更しない）
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<FlipSet, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let flips = rules::apply_move(&mut self.board, self.turn, square)?;
        debug!(tile = ?self.turn, %square, flipped = flips.len(), "move applied");

        self.turn = self.turn.opponent();
        Ok(flips)
    }

    /// 現在の石数を返す（盤面全体を数え直す）。
    #[inline]
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            return Status::GameOver {
                score: self.score(),
            };
        }

        Status::InProgress
    }

    /// 手番の石を返す。
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Tile {
        self.turn
    }
}
