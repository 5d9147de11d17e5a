//! Command interpreter behind the `chess-engine` binary.
//!
//! One command per line; replies go to the writer passed to
//! [`Session::execute`], as plain text or as JSON lines.

use std::io::Write;

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::info;

use chess_core::{
    matches_solution, BoardState, ChessError, Color, Engine, Game, GameHistory, GameStatus, Move,
    MoveOutcome, PieceKind, SearchResult,
};
use classical_engine::{ClassicalEngine, Difficulty, EngineConfig};

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  new | startpos              start a new game
  fen <fen>                   load a full FEN position
  placement <placement> [w|b] load a piece placement, side to move defaults to w
  move <e2e4[q|r|b|n]>        play a move for the side to move
  undo | redo                 step through history
  go [easy|medium|hard]       search and report the best move
  ai [easy|medium|hard]       search and play the best move
  difficulty <level>          set the default difficulty
  moves                       list legal moves
  status                      report check, mate or stalemate
  board                       print the board
  solve <move> <solution>     compare a move with a solution text
  quit";

#[derive(Serialize)]
struct SearchReport {
    best_move: Option<String>,
    score: i32,
    depth: u8,
    nodes: u64,
    difficulty: Difficulty,
}

impl SearchReport {
    fn new(result: &SearchResult, difficulty: Difficulty) -> Self {
        Self {
            best_move: result.best_move.map(|m| m.to_string()),
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            difficulty,
        }
    }
}

#[derive(Serialize)]
struct MoveReport {
    played: String,
    captured: Option<char>,
    promoted: Option<PieceKind>,
    castled: bool,
    status: GameStatus,
    side_to_move: Color,
}

impl MoveReport {
    fn new(mv: Move, outcome: &MoveOutcome, side_to_move: Color) -> Self {
        Self {
            played: mv.to_string(),
            captured: outcome.captured.map(|pc| pc.to_char()),
            promoted: outcome.promoted,
            castled: outcome.castled,
            status: outcome.status,
            side_to_move,
        }
    }
}

#[derive(Serialize)]
struct StatusReport {
    side_to_move: Color,
    status: GameStatus,
    placement: String,
}

pub struct Session {
    game: Game,
    engine: ClassicalEngine,
    history_limit: Option<usize>,
    json: bool,
}

impl Session {
    pub fn new(config: EngineConfig, json: bool) -> Self {
        let history_limit = config.history_limit;
        Self {
            game: Game::with_history(new_history(history_limit)),
            engine: ClassicalEngine::with_config(config),
            history_limit,
            json,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.config().difficulty
    }

    /// Runs one command line. Blank lines are ignored.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (cmd, args) = match parts.split_first() {
            Some((cmd, args)) => (*cmd, args),
            None => return Ok(Flow::Continue),
        };

        match cmd {
            "new" | "startpos" => {
                self.game.reset();
                self.engine.new_game();
                writeln!(out, "ok")?;
            }
            "fen" => {
                let board = BoardState::from_fen(&args.join(" "))?;
                self.game = Game::from_board_with_history(board, new_history(self.history_limit));
                self.engine.new_game();
                writeln!(out, "ok")?;
            }
            "placement" => {
                let placement = args.first().context("placement needs a piece placement")?;
                let side = match args.get(1).copied() {
                    None | Some("w") => Color::White,
                    Some("b") => Color::Black,
                    Some(other) => bail!("unknown side {other:?}"),
                };
                self.game.load_placement(placement, side);
                self.engine.new_game();
                writeln!(out, "ok")?;
            }
            "move" => {
                let text = args.first().context("move needs coordinate text like e2e4")?;
                let (mv, promotion) = parse_move(text)?;
                let outcome = self.game.play(mv, promotion)?;
                self.report_move(mv, &outcome, out)?;
            }
            "undo" => {
                let done = self.game.undo();
                writeln!(out, "{}", if done { "ok" } else { "nothing to undo" })?;
            }
            "redo" => {
                let done = self.game.redo();
                writeln!(out, "{}", if done { "ok" } else { "nothing to redo" })?;
            }
            "go" | "ai" => {
                let difficulty: Difficulty = match args.first() {
                    Some(level) => level.parse()?,
                    None => self.difficulty(),
                };
                let result = self.search(difficulty);
                if cmd == "go" {
                    self.report_search(&result, difficulty, out)?;
                } else {
                    match result.best_move {
                        Some(mv) => {
                            let outcome = self.game.play(mv, None)?;
                            self.report_move(mv, &outcome, out)?;
                        }
                        None => self.report_search(&result, difficulty, out)?,
                    }
                }
            }
            "difficulty" => {
                let level: Difficulty = args.first().context("difficulty needs a level")?.parse()?;
                self.engine.set_difficulty(level);
                writeln!(out, "ok")?;
            }
            "moves" => {
                let moves: Vec<String> = self.game.legal_moves().iter().map(Move::to_string).collect();
                if self.json {
                    writeln!(out, "{}", serde_json::to_string(&moves)?)?;
                } else {
                    writeln!(out, "{}", moves.join(" "))?;
                }
            }
            "status" => {
                let report = StatusReport {
                    side_to_move: self.game.side_to_move(),
                    status: self.game.status(),
                    placement: self.game.board().placement(),
                };
                if self.json {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else {
                    writeln!(out, "{} to move: {:?}", report.side_to_move, report.status)?;
                }
            }
            "board" => writeln!(out, "{}", self.game.board())?,
            "solve" => {
                let (text, expected) = match args {
                    [text, expected, ..] => (*text, *expected),
                    _ => bail!("solve needs a move and a solution text"),
                };
                let (mv, promotion) = parse_move(text)?;
                let hit = matches_solution(self.game.board(), mv, promotion, expected);
                writeln!(out, "{}", if hit { "correct" } else { "incorrect" })?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" => return Ok(Flow::Quit),
            other => bail!("unknown command {other:?}, try help"),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self, difficulty: Difficulty) -> SearchResult {
        let side = self.game.side_to_move();
        info!(%side, %difficulty, "thinking");
        self.game.set_searching(true);
        let result = self.engine.search(self.game.board(), side, difficulty.depth());
        self.game.set_searching(false);
        result
    }

    fn report_move<W: Write>(&self, mv: Move, outcome: &MoveOutcome, out: &mut W) -> anyhow::Result<()> {
        let report = MoveReport::new(mv, outcome, self.game.side_to_move());
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
            return Ok(());
        }
        write!(out, "played {}", report.played)?;
        if let Some(ch) = report.captured {
            write!(out, " captures {ch}")?;
        }
        if let Some(kind) = report.promoted {
            write!(out, " promotes {}", kind.letter())?;
        }
        if report.castled {
            write!(out, " castles")?;
        }
        match report.status {
            GameStatus::Ongoing => writeln!(out)?,
            status => writeln!(out, " ({status:?})")?,
        }
        Ok(())
    }

    fn report_search<W: Write>(
        &self,
        result: &SearchResult,
        difficulty: Difficulty,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let report = SearchReport::new(result, difficulty);
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            let best = report.best_move.as_deref().unwrap_or("0000");
            writeln!(
                out,
                "bestmove {best} score {} depth {} nodes {}",
                report.score, report.depth, report.nodes
            )?;
        }
        Ok(())
    }
}

fn new_history(limit: Option<usize>) -> GameHistory {
    match limit {
        Some(n) => GameHistory::with_limit(n),
        None => GameHistory::new(),
    }
}

/// Reads coordinate text with an optional promotion letter, e.g. `a7a8n`.
fn parse_move(text: &str) -> Result<(Move, Option<PieceKind>), ChessError> {
    let mv = Move::parse(text).ok_or_else(|| ChessError::InvalidMoveText(text.to_string()))?;
    let promotion = match text.get(4..) {
        None | Some("") => None,
        Some(rest) => {
            let mut chars = rest.chars();
            match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
                (Some(kind), None) => Some(kind),
                _ => return Err(ChessError::InvalidMoveText(text.to_string())),
            }
        }
    };
    Ok((mv, promotion))
}
