//! 行単位の端末入出力。
//!
//! `Prompt` は入力元（`Console`）を持ち、対局者設定・再戦確認・着手入力で共有する。
//! `Terminal` は `Prompt` の上でセッションの `Frontend` を実装する。

use anyhow::Context as _;
use colored::Colorize as _;
use rand::rngs::StdRng;
use reversegam_core::ai::Suggester;
use reversegam_core::ai::types::Advisor as _;
use reversegam_core::engine::{Board, Square, Tile};
use reversegam_core::session::{Directive, Frontend, GameEnd, MatchConfig, TurnView};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, error};

use crate::parse::{Command, ParseError, parse_command};
use crate::render;

/// 1行入力と表示の窓口。
pub trait Console {
    /// 入力履歴に1行を加える。
    ///
    /// # Errors
    ///
    /// 履歴を保存できなかった場合。
    fn remember(&mut self, line: &str) -> Result<(), ReadlineError>;

    /// `prompt` を示して1行読む。
    ///
    /// # Errors
    ///
    /// Ctrl-C・入力終端・端末の入出力エラー。
    fn read(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    /// 1行表示する。
    fn show(&mut self, text: &str);
}

impl Console for DefaultEditor {
    fn remember(&mut self, line: &str) -> Result<(), ReadlineError> {
        self.add_history_entry(line).map(|_added| ())
    }

    fn read(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}

/// 履歴付きで1行ずつ読む。
pub struct Prompt<C> {
    /// 入出力先。
    console: C,
}

impl Prompt<DefaultEditor> {
    /// rustyline の端末エディタで初期化する。
    pub fn new() -> anyhow::Result<Self> {
        let editor = DefaultEditor::new().context("failed to open the terminal for input")?;
        Ok(Self::with_console(editor))
    }
}

impl<C: Console> Prompt<C> {
    /// 再戦するかを尋ねる。`y` で始まる答えなら続ける。
    pub fn play_again(&mut self) -> anyhow::Result<bool> {
        let answer = self.read_line("Do you want to play again? (yes or no): ")?;
        Ok(answer.is_some_and(|line| line.trim().to_lowercase().starts_with('y')))
    }

    /// 1行読む。Ctrl-C・入力終端なら `None`。
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.console.read(prompt) {
            Ok(line) => {
                if let Err(err) = self.console.remember(&line) {
                    debug!(%err, "history entry not saved");
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read from the terminal"),
        }
    }

    /// 1行表示する。
    pub fn say(&mut self, text: &str) {
        self.console.show(text);
    }

    /// 両者の名前と、どちらが `O` を持つかを尋ねる。
    ///
    /// `O` を持つ対局者は2人の名前のどちらかが入力されるまで尋ね直す。
    /// 設定の途中で入力が終わったら `None`。
    pub fn setup_match(&mut self) -> anyhow::Result<Option<MatchConfig>> {
        let Some(player1) = self.read_line("Enter the name of player 1: ")? else {
            return Ok(None);
        };
        let Some(player2) = self.read_line("Enter the name of player 2: ")? else {
            return Ok(None);
        };
        let player1 = player1.trim().to_owned();
        let player2 = player2.trim().to_owned();

        let question = format!("Which player takes the \"{}\" tiles? (enter a name): ", Tile::Light);
        loop {
            let Some(choice) = self.read_line(&question)? else {
                return Ok(None);
            };
            let choice = choice.trim();
            if choice == player1 {
                return Ok(Some(MatchConfig::new(player1, player2, Tile::Light)));
            }
            if choice == player2 {
                return Ok(Some(MatchConfig::new(player1, player2, Tile::Dark)));
            }
        }
    }

    /// 任意の入出力先で初期化する。
    pub const fn with_console(console: C) -> Self {
        Self { console }
    }
}

/// `Prompt` の上に載せたセッションの `Frontend`。
pub struct Terminal<'a, C> {
    /// `suggest` に答える助言役。
    advisor: Suggester<StdRng>,
    /// 直前に描画した盤面（`suggest` 用）。
    board: Board,
    /// 対局者の設定。
    config: &'a MatchConfig,
    /// 入力中に起きた端末の入出力エラー。
    failure: Option<anyhow::Error>,
    /// 入出力。
    prompt: &'a mut Prompt<C>,
    /// 直前に描画した手番の石（`suggest` 用）。
    tile: Tile,
}

impl<'a, C: Console> Terminal<'a, C> {
    /// 対局の終わり方を返す。入力中に入出力エラーが起きていればそれを返す。
    pub fn finish(self, end: GameEnd) -> anyhow::Result<GameEnd> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(end),
        }
    }

    pub fn new(prompt: &'a mut Prompt<C>, config: &'a MatchConfig, advisor: Suggester<StdRng>) -> Self {
        Self {
            advisor,
            board: Board::initial(),
            config,
            failure: None,
            prompt,
            tile: Tile::Dark,
        }
    }
}

impl<C: Console> Frontend for Terminal<'_, C> {
    fn render(&mut self, view: &TurnView<'_>) {
        self.board = *view.board;
        self.tile = view.tile;

        self.prompt.say("");
        self.prompt.say(&render::board_text(view.board, view.hints));
        self.prompt.say(&render::score_line(self.config, view.score));
    }

    fn request_move(&mut self, legal: &[Square], participant: &str) -> Directive {
        let question = format!(
            "{participant}, it is your turn. Enter a move (e.g. 81), \"hints\", \"suggest\" or \"quit\": "
        );

        loop {
            let line = match self.prompt.read_line(&question) {
                Ok(Some(line)) => line,
                Ok(None) => return Directive::Quit,
                Err(err) => {
                    error!("{err:#}");
                    self.failure = Some(err);
                    return Directive::Quit;
                }
            };

            match parse_command(&line) {
                Ok(Command::Hints) => return Directive::ToggleHints,
                Ok(Command::Quit) => return Directive::Quit,
                Ok(Command::Move(square)) if legal.contains(&square) => return Directive::Place(square),
                Ok(Command::Move(square)) => {
                    let message = format!("{square} is not a legal move.");
                    self.prompt.say(&message.bright_red().to_string());
                }
                Ok(Command::Suggest) => {
                    let message = match self.advisor.suggest(&self.board, self.tile) {
                        Some(square) => format!("Suggested move: {}", square.to_string().bright_cyan()),
                        None => "No move to suggest.".to_owned(),
                    };
                    self.prompt.say(&message);
                }
                Err(ParseError::Empty) => {}
                Err(err) => self.prompt.say(&err.to_string().bright_red().to_string()),
            }
        }
    }

    fn skipped(&mut self, participant: &str, tile: Tile) {
        self.prompt
            .say(&format!("{participant} ({tile}) has no legal move and must pass."));
    }
}
