//! Static evaluation: material, piece-square tables, threats and forks.

use chess_core::{piece_attacks, BoardState, Color, PieceKind, Square};

use crate::exchange::count_attackers;

/// Flat bonus for a rook on a file with no pawns of either color.
pub const OPEN_FILE_BONUS: i32 = 50;

/// Weight of the threat term relative to material.
const THREAT_WEIGHT: i32 = 3;

// Tables are laid out from White's side of the board: row 0 is the rank
// White promotes on. Black reads them mirrored.

#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
const ROOK_TABLE: [[i32; 8]; 8] = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
const KING_MIDDLE_TABLE: [[i32; 8]; 8] = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

#[rustfmt::skip]
const KING_END_TABLE: [[i32; 8]; 8] = [
    [-50,-40,-30,-20,-20,-30,-40,-50],
    [-30,-20,-10,  0,  0,-10,-20,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 30, 40, 40, 30,-10,-30],
    [-30,-10, 20, 30, 30, 20,-10,-30],
    [-30,-30,  0,  0,  0,  0,-30,-30],
    [-50,-30,-30,-30,-30,-30,-30,-50],
];

/// Evaluates the position from `perspective`'s point of view, in
/// centipawns. Positive favors `perspective`.
pub fn evaluate(board: &BoardState, perspective: Color) -> i32 {
    let mut score = material_and_placement(board);

    score += THREAT_WEIGHT * threats(board, Color::White);
    score -= THREAT_WEIGHT * threats(board, Color::Black);

    score += forks(board, Color::White);
    score -= forks(board, Color::Black);

    match perspective {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Endgame once the queens are gone, or with at most one queen and no rooks.
pub fn is_endgame(board: &BoardState) -> bool {
    let queens = board.count(PieceKind::Queen);
    let rooks = board.count(PieceKind::Rook);
    queens == 0 || (queens <= 1 && rooks == 0)
}

pub fn is_open_file(board: &BoardState, col: u8) -> bool {
    (0..8).all(|row| {
        !matches!(board.piece_at(Square::at(row, col)), Some(pc) if pc.kind == PieceKind::Pawn)
    })
}

/// Piece-square bonus for a piece of `color` and `kind` standing on `sq`.
pub fn placement_bonus(kind: PieceKind, color: Color, sq: Square, endgame: bool) -> i32 {
    let row = match color {
        Color::White => sq.row() as usize,
        Color::Black => 7 - sq.row() as usize,
    };
    let col = sq.col() as usize;
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &KING_END_TABLE,
        PieceKind::King => &KING_MIDDLE_TABLE,
    };
    table[row][col]
}

/// Material plus placement, White positive.
fn material_and_placement(board: &BoardState) -> i32 {
    let endgame = is_endgame(board);
    let mut score = 0;
    for sq in Square::all() {
        let pc = match board.piece_at(sq) {
            Some(pc) => pc,
            None => continue,
        };
        let mut total = pc.value() + placement_bonus(pc.kind, pc.color, sq, endgame);
        if pc.kind == PieceKind::Rook && is_open_file(board, sq.col()) {
            total += OPEN_FILE_BONUS;
        }
        score += match pc.color {
            Color::White => total,
            Color::Black => -total,
        };
    }
    score
}

/// Penalty (zero or negative) for `side`'s pieces standing en prise.
/// Outnumbered pieces cost twice their value, merely attacked ones a sixth.
/// The king is left to the mate search.
pub fn threats(board: &BoardState, side: Color) -> i32 {
    let mut penalty = 0;
    for (sq, pc) in board.pieces(side) {
        if pc.kind == PieceKind::King {
            continue;
        }
        let attackers = count_attackers(board, sq, side.other());
        if attackers == 0 {
            continue;
        }
        let defenders = count_attackers(board, sq, side);
        penalty -= if attackers > defenders {
            pc.value() * 2
        } else {
            pc.value() / 6
        };
    }
    penalty
}

/// Bonus for `side`'s pieces attacking two or more enemy pieces at once: a
/// quarter of the targets' combined value. An attacked king counts as a
/// target worth nothing.
pub fn forks(board: &BoardState, side: Color) -> i32 {
    let enemies: Vec<_> = board.pieces(side.other()).collect();
    let mut bonus = 0;
    for (from, pc) in board.pieces(side) {
        let mut hits = 0;
        let mut sum = 0;
        for &(target, victim) in &enemies {
            if piece_attacks(board, pc, from, target) {
                hits += 1;
                if victim.kind != PieceKind::King {
                    sum += victim.value();
                }
            }
        }
        if hits >= 2 {
            bonus += sum / 4;
        }
    }
    bonus
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
