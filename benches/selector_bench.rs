use criterion::{criterion_group, criterion_main, Criterion};
use gomoku::{Board, MoveSelector, Pos, Stone};

fn midgame_board() -> Board {
    let mut board = Board::new();
    // A mid-game position with 20 moves played
    let moves = [
        (7, 7, Stone::Black),
        (7, 8, Stone::White),
        (8, 7, Stone::Black),
        (8, 8, Stone::White),
        (6, 6, Stone::Black),
        (9, 9, Stone::White),
        (5, 5, Stone::Black),
        (10, 10, Stone::White),
        (8, 6, Stone::Black),
        (6, 8, Stone::White),
        (7, 9, Stone::Black),
        (9, 7, Stone::White),
        (6, 10, Stone::Black),
        (10, 6, Stone::White),
        (7, 5, Stone::Black),
        (5, 7, Stone::White),
        (8, 4, Stone::Black),
        (4, 8, Stone::White),
        (9, 3, Stone::Black),
        (3, 9, Stone::White),
    ];
    for (row, col, stone) in moves {
        board.apply_move(Pos::new(row, col), stone);
    }
    board
}

fn bench_choose_move_empty_board(c: &mut Criterion) {
    let board = Board::new();
    let selector = MoveSelector::new();

    c.bench_function("choose_move_15x15_empty", |b| {
        b.iter(|| selector.choose_move(&board, Stone::Black))
    });
}

fn bench_choose_move_midgame(c: &mut Criterion) {
    let board = midgame_board();
    let selector = MoveSelector::new();

    c.bench_function("choose_move_15x15_midgame", |b| {
        b.iter(|| selector.choose_move(&board, Stone::White))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("selector_vs_selector_20_plies", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let selector = MoveSelector::new();
            let mut player = Stone::Black;

            for _ in 0..20 {
                let Some(pos) = selector.choose_move(&board, player) else {
                    break;
                };
                if board.apply_move(pos, player) {
                    break;
                }
                player = player.opponent();
            }
            board
        })
    });
}

criterion_group!(
    benches,
    bench_choose_move_empty_board,
    bench_choose_move_midgame,
    bench_full_game
);
criterion_main!(benches);
