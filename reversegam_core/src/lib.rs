//! Reversi (Othello) core logic for two human players.
//!
//! このクレートはルールとゲーム進行を管理する `engine`、1ゲーム分の対局を回す `session`、
//! 着手候補を示す `ai` を提供します。
//! UI（`reversegam_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 着手候補を示す助言役を提供するモジュール。
pub mod ai;

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// 対局者の設定と、表示/入力の協力者を介した1ゲームの進行。
pub mod session;
