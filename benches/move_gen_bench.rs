//! Move Generation Benchmarks
//!
//! Performance benchmarks for board setup, move generation and full turns
//! using Criterion.

use chesskers::game::rules::{get_attack_moves, get_possible_moves, BoardState, StartingLayout};
use chesskers::game::{Position, Team, TurnEngine};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_initialize_board(c: &mut Criterion) {
    let layout = StartingLayout::standard();

    c.bench_function("initialize_standard_board", |b| {
        b.iter(|| black_box(BoardState::with_layout(&layout)))
    });
}

fn bench_move_generation_both_teams(c: &mut Criterion) {
    let board = BoardState::with_layout(&StartingLayout::standard()).expect("standard layout");

    c.bench_function("generate_moves_both_teams", |b| {
        b.iter(|| {
            let chess: usize = board
                .pieces_of(Team::Chess)
                .map(|p| get_possible_moves(p, &board).len())
                .sum();
            let checkers: usize = board
                .pieces_of(Team::Checkers)
                .map(|p| get_possible_moves(p, &board).len())
                .sum();
            black_box((chess, checkers))
        })
    });
}

fn bench_queen_open_board(c: &mut Criterion) {
    let layout = StartingLayout::from_diagram(&[
        "........",
        "..o...o.",
        "........",
        "...Q....",
        "........",
        ".o...o..",
    ])
    .expect("valid diagram");
    let board = BoardState::with_layout(&layout).expect("valid layout");
    let queen = board
        .piece_at(Position::new(3, 3))
        .ok()
        .flatten()
        .cloned()
        .expect("queen placed");

    c.bench_function("queen_moves_open_board", |b| {
        b.iter(|| black_box(get_possible_moves(&queen, &board)))
    });
    c.bench_function("queen_attack_moves_open_board", |b| {
        b.iter(|| black_box(get_attack_moves(&queen, &board)))
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("select_and_move_turn", |b| {
        b.iter(|| {
            let mut engine = TurnEngine::standard();
            let moves = engine.select_piece(Position::new(2, 2)).expect("own piece");
            let outcome = engine.move_to(moves[0]).expect("legal move");
            black_box((outcome, engine.drain_events().len()))
        })
    });
}

criterion_group!(
    benches,
    bench_initialize_board,
    bench_move_generation_both_teams,
    bench_queen_open_board,
    bench_full_turn,
);
criterion_main!(benches);
