/// 盤面（8x8 のマス目）と石数。
pub mod board;
/// ゲーム進行（手番、パス、終局判定）の実装。
pub mod game;
/// 合法手判定と反転処理の実装。
pub mod rules;
pub mod types;

pub type Board = board::Board;
pub type Cell = types::Cell;
pub type FlipSet = rules::FlipSet;
pub type Game = game::Game;
pub type GameStatus = game::Status;
pub type IllegalMove = rules::IllegalMove;
pub type Outcome = board::Outcome;
pub type PlayError = game::PlayError;
pub type Score = board::Score;
pub type Square = types::Square;
pub type Tile = types::Tile;
