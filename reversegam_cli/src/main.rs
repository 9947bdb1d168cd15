//! 端末で2人対戦するリバーシ。

mod parse;
mod render;
mod terminal;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};
use reversegam_core::ai::Suggester;
use reversegam_core::session::{GameEnd, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::terminal::{Prompt, Terminal};

/// 標準エラーに書くログの形式。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogFormat {
    /// 人が読む1行形式。
    Text,
    /// 1行1オブジェクトの JSON。
    Json,
}

/// コマンドライン引数。
#[derive(Parser, Debug)]
#[command(name = "reversegam", about = "Two-player Othello/Reversi in the terminal")]
struct Cli {
    /// Seed for who moves first and for the `suggest` command
    #[arg(long)]
    seed: Option<u64>,

    /// Start every game with the legal moves highlighted
    #[arg(long)]
    hints: bool,

    /// Format of the log written to stderr (filter with RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// `RUST_LOG`（既定は `warn`）で絞ったログを標準エラーへ流す。
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut prompt = Prompt::new()?;
    prompt.say("Welcome to Reversegam!");
    let Some(config) = prompt.setup_match()? else {
        return Ok(());
    };
    info!(?config, "match configured");

    loop {
        let mut session = Session::new(&config, &mut rng).with_hints(args.hints);
        let first = session.game().turn();
        prompt.say(&format!("{} ({first}) moves first.", config.name_for(first)));

        let advisor = Suggester::from_seed(rng.random());
        let mut frontend = Terminal::new(&mut prompt, &config, advisor);
        let end = session.run(&mut frontend);

        match frontend.finish(end)? {
            GameEnd::Finished(report) => {
                prompt.say("");
                prompt.say(&render::board_text(&report.board, None));
                prompt.say(&render::final_text(&config, &report));
            }
            _ => {
                prompt.say("Thanks for playing!");
                return Ok(());
            }
        }

        if !prompt.play_again()? {
            return Ok(());
        }
    }
}
