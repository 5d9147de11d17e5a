use crate::{board::BoardState, execute::play_trial, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with the
/// board's side to move moving first. Promotions count once (to a queen),
/// since the promotion piece is not part of a move.
pub fn perft(board: &BoardState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &BoardState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, board.side_to_move, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut next = board.clone();
            play_trial(&mut next, mv);
            nodes += inner(&next, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}
