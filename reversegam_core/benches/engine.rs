//! `reversegam_core::engine` の性能計測（合法手の列挙、着手の検証と適用）。

use core::hint::black_box;
use criterion::{BatchSize, BenchmarkId, Criterion};
use reversegam_core::engine::{self, rules};

/// 列挙順で最後の合法手を打ち続け、指定手数だけ進めたゲームを返す。
fn game_after_plies(plies: u16) -> engine::Game {
    let mut game = engine::Game::new(engine::Tile::Dark);

    for _ply in u16::MIN..plies {
        if game.auto_pass_if_needed() {
            continue;
        }
        let Some(square) = game.legal_moves().last().copied() else {
            break;
        };
        if game.play(square).is_err() {
            break;
        }
    }

    game
}

/// 序盤・中盤・終盤の局面。
fn game_samples() -> [(&'static str, engine::Game); 3] {
    [
        ("opening", game_after_plies(0)),
        ("midgame", game_after_plies(20)),
        ("endgame", game_after_plies(44)),
    ]
}

/// 各局面で最初の合法手を `rules::apply_move` で打つ。
fn bench_apply_move(criterion: &mut Criterion, samples: &[(&'static str, engine::Game)]) {
    let mut group = criterion.benchmark_group("engine/apply_move");

    for (label, game) in samples {
        let Some(square) = game.legal_moves().first().copied() else {
            continue;
        };
        let tile = game.turn();
        group.bench_with_input(BenchmarkId::from_parameter(label), game.board(), |bench, board| {
            bench.iter_batched(
                || *board,
                |mut trial| black_box(rules::apply_move(&mut trial, tile, square)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// 盤外・埋まったマスを含む全マスを `rules::evaluate_move` で検証する。
fn bench_evaluate_every_square(criterion: &mut Criterion, samples: &[(&'static str, engine::Game)]) {
    let mut group = criterion.benchmark_group("engine/evaluate_move");

    for (label, game) in samples {
        let tile = game.turn();
        group.bench_with_input(BenchmarkId::from_parameter(label), game.board(), |bench, board| {
            bench.iter(|| {
                let mut legal = 0_u32;
                for col in -1_i8..9 {
                    for row in -1_i8..9 {
                        if rules::evaluate_move(black_box(board), tile, col, row).is_ok() {
                            legal = legal.saturating_add(1);
                        }
                    }
                }
                black_box(legal)
            });
        });
    }

    group.finish();
}

/// 各局面の `rules::legal_moves` を計測する。
fn bench_legal_moves(criterion: &mut Criterion, samples: &[(&'static str, engine::Game)]) {
    let mut group = criterion.benchmark_group("engine/legal_moves");

    for (label, game) in samples {
        let tile = game.turn();
        group.bench_with_input(BenchmarkId::from_parameter(label), game.board(), |bench, board| {
            bench.iter(|| black_box(rules::legal_moves(black_box(board), tile)));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    let samples = game_samples();

    bench_apply_move(&mut criterion, &samples);
    bench_evaluate_every_square(&mut criterion, &samples);
    bench_legal_moves(&mut criterion, &samples);

    criterion.final_summary();
}
