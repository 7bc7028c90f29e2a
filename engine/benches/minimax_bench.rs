use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use engine::game::{Board, BotInput, GameState, GameStatus, Mark, calculate_move, minimax};

fn bench_first_move_from_empty_board() {
    let mut board = Board::new();
    minimax(&mut board, Mark::X);
}

fn bench_single_move_mid_game() {
    use engine::game::Mark::{Empty as E, O, X};

    #[rustfmt::skip]
    let board = Board::from_cells([
        X, E, E,
        E, O, E,
        X, E, O,
    ]);
    let input = BotInput {
        board,
        current_mark: X,
    };
    calculate_move(&input);
}

fn bench_full_self_play_game() {
    let mut state = GameState::new();

    while state.status() == GameStatus::InProgress {
        let input = BotInput::from_game_state(&state);
        let index = calculate_move(&input).unwrap();
        let mark = state.current_mark();
        state.place_mark(mark, index).unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("first_move_empty", |b| {
        b.iter(bench_first_move_from_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
