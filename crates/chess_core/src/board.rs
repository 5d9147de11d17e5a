use std::fmt;

use crate::error::ChessError;
use crate::types::*;

/// The 64 cells of the board, indexed by [`Square::index`].
pub type Grid = [Option<Piece>; 64];

/// Castling availability. A flag drops to `false` once the king or the
/// corresponding rook has left its original square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }
    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    /// The king of `c` moved: both rights are gone.
    pub fn revoke_all(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Revokes the right tied to the rook that starts on `sq`, if any.
    pub fn revoke_rook(&mut self, c: Color, sq: Square) {
        if sq.row() != c.back_row() {
            return;
        }
        match (c, sq.col()) {
            (Color::White, 0) => self.wq = false,
            (Color::White, 7) => self.wk = false,
            (Color::Black, 0) => self.bq = false,
            (Color::Black, 7) => self.bk = false,
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub grid: Grid,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn skipped over on the previous ply, capturable en passant
    /// for exactly one ply.
    pub en_passant: Option<Square>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl BoardState {
    /// An empty board with White to move and no castling rights.
    pub fn empty() -> Self {
        BoardState {
            grid: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    pub fn startpos() -> Self {
        let mut b = BoardState::empty();
        b.castling = CastlingRights::ALL;
        for col in 0..8u8 {
            for c in Color::BOTH {
                b.set_piece(
                    Square::at(c.pawn_row(), col),
                    Some(Piece::new(c, PieceKind::Pawn)),
                );
                b.set_piece(
                    Square::at(c.back_row(), col),
                    Some(Piece::new(c, BACK_RANK[col as usize])),
                );
            }
        }
        b
    }

    /// Builds a position from a placement string, with White to move and
    /// every castling right available (castling still requires king and rook
    /// on their home squares).
    pub fn from_placement(placement: &str) -> Self {
        let mut b = BoardState::empty();
        b.castling = CastlingRights::ALL;
        b.load_placement(placement);
        b
    }

    /// Replaces the pieces on the board from the placement field of a FEN
    /// string. Parsing stops at the first space, so a full FEN may be passed
    /// but its other fields are not read. Characters that are not piece
    /// letters, digits or `/` are skipped, as are pieces that would land off
    /// the board. The en-passant target is cleared; side to move and
    /// castling rights are left for the caller to set.
    pub fn load_placement(&mut self, placement: &str) {
        self.grid = [None; 64];
        self.en_passant = None;

        let mut row: i8 = 0;
        let mut col: i8 = 0;
        for ch in placement.chars() {
            if ch == ' ' {
                break;
            }
            if ch == '/' {
                row = row.saturating_add(1);
                col = 0;
            } else if let Some(d) = ch.to_digit(10) {
                col = col.saturating_add(d as i8);
            } else if let Some(pc) = Piece::from_char(ch) {
                if let Some(s) = Square::new(row, col) {
                    self.set_piece(s, Some(pc));
                }
                col = col.saturating_add(1);
            }
        }
    }

    /// Strict Forsyth-Edwards parser reading placement, side to move,
    /// castling and en-passant fields. Clock fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let bad = |why: &str| ChessError::InvalidFen(format!("{why}: {fen:?}"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(bad("empty"));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }
        let mut b = BoardState::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or_else(|| bad("invalid piece letter"))?;
                    if col >= 8 {
                        return Err(bad("too many files in rank"));
                    }
                    b.set_piece(Square::at(row as u8, col as u8), Some(pc));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("too many files in rank"));
                }
            }
            if col != 8 {
                return Err(bad("not enough files in rank"));
            }
        }

        b.side_to_move = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("invalid side to move")),
        };

        let castle = parts.get(2).copied().unwrap_or("-");
        if castle != "-" {
            for c in castle.chars() {
                match c {
                    'K' => b.castling.wk = true,
                    'Q' => b.castling.wq = true,
                    'k' => b.castling.bk = true,
                    'q' => b.castling.bq = true,
                    _ => return Err(bad("invalid castling field")),
                }
            }
        }

        let ep = parts.get(3).copied().unwrap_or("-");
        if ep != "-" {
            b.en_passant = Some(Square::parse(ep).ok_or_else(|| bad("invalid en-passant square"))?);
        }

        Ok(b)
    }

    /// Placement field of the FEN for this position.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.index()] = pc;
    }
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.index()].is_none()
    }

    /// All pieces of color `c` with their squares.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(move |(i, cell)| match cell {
            Some(pc) if pc.color == c => Some((Square::from_index(i), *pc)),
            _ => None,
        })
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn king_exists(&self, c: Color) -> bool {
        self.king_sq(c).is_some()
    }

    pub fn count(&self, kind: PieceKind) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|pc| pc.kind == kind)
            .count()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = self
                    .piece_at(Square::at(row, col))
                    .map(Piece::to_char)
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
