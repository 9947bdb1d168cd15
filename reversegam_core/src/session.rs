//! 2人の対局者による1ゲーム分の進行。
//!
//! `Session` は `Game` を所有し、表示と入力を `Frontend` に任せて手番を回す。
//! ヒント表示の切り替えと中断（Quit）はここで扱う。

use crate::engine::board::{Board, Outcome, Score};
use crate::engine::game::Game;
use crate::engine::types::{Square, Tile};
use rand::Rng;
use tracing::{info, warn};

/// 対局者の席。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Seat {
    /// プレイヤー1。
    Player1,
    /// プレイヤー2。
    Player2,
}

/// 対局者の名前と石の割り当て。ゲーム開始前に一度だけ作り、以後は変更しない。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchConfig {
    /// プレイヤー1の名前。
    player1_name: String,
    /// プレイヤー1の石。
    player1_tile: Tile,
    /// プレイヤー2の名前。
    player2_name: String,
    /// プレイヤー2の石（常に `player1_tile` の反対）。
    player2_tile: Tile,
}

/// `Frontend` が返す指示。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Directive {
    /// 指定マスへ着手。
    Place(Square),
    /// 対局全体を中断する。
    Quit,
    /// ヒント表示を切り替える（手番は進まない）。
    ToggleHints,
}

/// 描画に渡す1手番分の情報。
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub struct TurnView<'view> {
    /// 現在の盤面。
    pub board: &'view Board,
    /// ヒント表示中なら手番側の合法手。
    pub hints: Option<&'view [Square]>,
    /// 手番の対局者名。
    pub participant: &'view str,
    /// 現在の石数。
    pub score: Score,
    /// 手番の石。
    pub tile: Tile,
}

/// 表示と入力を担う外部の協力者。
pub trait Frontend {
    /// 盤面を描画する。
    fn render(&mut self, view: &TurnView<'_>);

    /// 対局者に手を尋ねる。入力の書式エラーはこの中で再入力させる。
    ///
    /// 入力を待つ間は無期限にブロックしてよい。
    fn request_move(&mut self, legal: &[Square], participant: &str) -> Directive;

    /// 合法手が無く手番が飛ばされたことを知らせる。
    #[inline]
    fn skipped(&mut self, _participant: &str, _tile: Tile) {}
}

/// 勝敗（席単位）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MatchResult {
    /// 引き分け。
    Draw,
    /// `winner` が `margin` 石差で勝利。
    Win {
        /// 石差。
        margin: u32,
        /// 勝った席。
        winner: Seat,
    },
}

/// 終局時の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct FinalReport {
    /// 最終盤面。
    pub board: Board,
    /// 勝敗。
    pub result: MatchResult,
    /// 最終盤面の石数。
    pub score: Score,
}

/// ゲームの終わり方。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum GameEnd {
    /// 双方に合法手が無くなり終局した。
    Finished(FinalReport),
    /// 対局者が中断した。
    Quit,
}

/// 1ゲーム分の進行。
#[derive(Debug)]
pub struct Session<'cfg> {
    /// 対局者の設定。
    config: &'cfg MatchConfig,
    /// 進行中のゲーム。
    game: Game,
    /// ヒント表示中かどうか。
    show_hints: bool,
}

impl MatchConfig {
    /// 指定席の名前を返す。
    #[inline]
    #[must_use]
    pub fn name(&self, seat: Seat) -> &str {
        match seat {
            Seat::Player1 => &self.player1_name,
            Seat::Player2 => &self.player2_name,
        }
    }

    /// 指定の石を持つ対局者の名前を返す。
    #[inline]
    #[must_use]
    pub fn name_for(&self, tile: Tile) -> &str {
        self.name(self.seat_for(tile))
    }

    /// プレイヤー1の石を指定して設定を作る。プレイヤー2は反対の石を持つ。
    #[inline]
    #[must_use]
    pub fn new<N1, N2>(player1_name: N1, player2_name: N2, player1_tile: Tile) -> Self
    where
        N1: Into<String>,
        N2: Into<String>,
    {
        Self {
            player1_name: player1_name.into(),
            player1_tile,
            player2_name: player2_name.into(),
            player2_tile: player1_tile.opponent(),
        }
    }

    /// 石数から席単位の勝敗を求める。
    #[inline]
    #[must_use]
    pub fn result(&self, score: Score) -> MatchResult {
        match score.outcome() {
            Outcome::Draw => MatchResult::Draw,
            Outcome::Win { margin, winner } => MatchResult::Win {
                margin,
                winner: self.seat_for(winner),
            },
        }
    }

    /// 指定の石を持つ席を返す。
    #[inline]
    #[must_use]
    pub fn seat_for(&self, tile: Tile) -> Seat {
        if tile == self.player1_tile {
            Seat::Player1
        } else {
            Seat::Player2
        }
    }

    /// 指定席の石を返す。
    #[inline]
    #[must_use]
    pub const fn tile(&self, seat: Seat) -> Tile {
        match seat {
            Seat::Player1 => self.player1_tile,
            Seat::Player2 => self.player2_tile,
        }
    }
}

impl<'cfg> Session<'cfg> {
    /// 既存のゲームから進行を始める。
    #[inline]
    #[must_use]
    pub const fn from_game(config: &'cfg MatchConfig, game: Game) -> Self {
        Self {
            config,
            game,
            show_hints: false,
        }
    }

    /// 進行中のゲームを返す。
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// 先手を乱数で決め、初期局面から新しいゲームを始める。
    #[inline]
    #[must_use]
    pub fn new<R: Rng>(config: &'cfg MatchConfig, rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            Seat::Player1
        } else {
            Seat::Player2
        };
        let tile = config.tile(first);
        info!(first = config.name(first), ?tile, "new game");

        Self::from_game(config, Game::new(tile))
    }

    /// 現在の盤面から結果を作る。
    fn report(&self) -> FinalReport {
        let score = self.game.score();
        FinalReport {
            board: *self.game.board(),
            result: self.config.result(score),
            score,
        }
    }

    /// 終局または中断まで手番を回す。
    ///
    /// 合法手が無い手番は `Frontend::skipped` で知らせて飛ばす。双方に合法手が無ければ
    /// 入力を求めずに終局する。`Frontend` が合法手以外を返した場合は盤面を変えずに再度尋ねる。
    #[inline]
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> GameEnd {
        let config = self.config;
        loop {
            if self.game.is_game_over() {
                let report = self.report();
                info!(dark = report.score.dark, light = report.score.light, "game over");
                return GameEnd::Finished(report);
            }

            let tile = self.game.turn();
            let participant = config.name_for(tile);
            let legal = self.game.legal_moves();

            if legal.is_empty() {
                if self.game.auto_pass_if_needed() {
                    frontend.skipped(participant, tile);
                }
                continue;
            }

            frontend.render(&TurnView {
                board: self.game.board(),
                hints: self.show_hints.then_some(legal.as_slice()),
                participant,
                score: self.game.score(),
                tile,
            });

            match frontend.request_move(&legal, participant) {
                Directive::Place(square) => {
                    if let Err(err) = self.game.play(square) {
                        warn!(%err, participant, "move rejected");
                    }
                }
                Directive::Quit => {
                    info!(participant, "game abandoned");
                    return GameEnd::Quit;
                }
                Directive::ToggleHints => {
                    self.show_hints = !self.show_hints;
                }
            }
        }
    }

    /// ヒント表示の初期状態を設定する。
    #[inline]
    #[must_use]
    pub const fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }
}
