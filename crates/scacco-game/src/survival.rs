//! The knight-survival variant.
//!
//! A single light knight against a stream of dark enemies. There are
//! no kings on this board, so check detection never runs; the game
//! ends when the player is captured or the external countdown expires.
//!
//! Reduced movement rules apply: knights step normally, but bishops
//! take exactly one diagonal step per turn instead of a full ray. This
//! is a deliberate simplification of the variant, not an oversight.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use scacco_core::{Board, Color, Piece, PieceKind, Square, pseudo_legal_moves};

use crate::abilities::{AbilityKind, AbilitySet};
use crate::error::AbilityError;
use crate::outcome::GameOverReason;

/// Enemies alive on the board are capped at this count; spawn attempts
/// beyond it are dropped.
pub const MAX_ENEMIES: usize = 5;

const PLAYER_START: (u8, u8) = (4, 4);

/// Result of one survival turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the player's move was applied. `false` means the request
    /// was a no-op: bad move number or game already over.
    pub applied: bool,
    /// The enemy captured by the player's move, if any.
    pub captured: Option<Piece>,
    /// The score after this turn (one point per captured enemy).
    pub score: u32,
}

impl TurnOutcome {
    const fn rejected(score: u32) -> TurnOutcome {
        TurnOutcome {
            applied: false,
            captured: None,
            score,
        }
    }
}

/// State for one survival run.
///
/// One call to [`play_turn`](SurvivalGame::play_turn) is a full cycle:
/// the player moves (captures score a point), one enemy spawn is
/// attempted, every enemy takes a greedy step toward the player, and
/// ability cooldowns tick.
pub struct SurvivalGame {
    board: Board,
    player: Square,
    score: u32,
    turn_count: u32,
    game_over: Option<GameOverReason>,
    abilities: AbilitySet,
    shielded: bool,
    rng: StdRng,
}

impl SurvivalGame {
    /// Create a game with the player knight on its starting square and
    /// no enemies. Call [`start`](SurvivalGame::start) to seed the
    /// first wave.
    pub fn new() -> SurvivalGame {
        SurvivalGame::with_rng(StdRng::from_entropy())
    }

    /// Create a game with a fixed RNG seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> SurvivalGame {
        SurvivalGame::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> SurvivalGame {
        let player = Square::at(PLAYER_START.0, PLAYER_START.1)
            .expect("player start square is on the board");
        let mut board = Board::empty();
        board.place(player, Piece::LIGHT_KNIGHT);
        SurvivalGame {
            board,
            player,
            score: 0,
            turn_count: 0,
            game_over: None,
            abilities: AbilitySet::new(),
            shielded: false,
            rng,
        }
    }

    /// Seed the opening wave: three spawn attempts.
    pub fn start(&mut self) {
        for _ in 0..3 {
            self.spawn_enemy();
        }
        info!(enemies = self.enemy_squares().len(), "survival game started");
    }

    /// Return the current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the player's square.
    #[inline]
    pub fn player(&self) -> Square {
        self.player
    }

    /// Return the score: one point per enemy captured.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Return the number of completed turns.
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Return the ability cooldown state.
    #[inline]
    pub fn abilities(&self) -> &AbilitySet {
        &self.abilities
    }

    /// Return `true` if a shield is currently active.
    #[inline]
    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    /// Return `true` if the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Return why the game ended, if it has.
    #[inline]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Return the player's valid destinations, in generation order.
    ///
    /// UIs number these 1-8 on screen; the numbering contract is this
    /// order, not rank/file order.
    pub fn valid_moves(&self) -> Vec<Square> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        reduced_destinations(&self.board, self.player)
    }

    /// Play one turn, moving the player to `valid_moves()[index]`.
    ///
    /// An out-of-range index is a no-op with `applied = false`.
    pub fn play_turn(&mut self, index: usize) -> TurnOutcome {
        let moves = self.valid_moves();
        let Some(&dest) = moves.get(index) else {
            debug!(index, "turn rejected: no such move number");
            return TurnOutcome::rejected(self.score);
        };
        self.advance_turn(dest)
    }

    /// Play one turn, moving the player to the given square. The square
    /// must be one of [`valid_moves`](SurvivalGame::valid_moves).
    pub fn play_turn_to(&mut self, dest: Square) -> TurnOutcome {
        if !self.valid_moves().contains(&dest) {
            debug!(%dest, "turn rejected: destination not valid");
            return TurnOutcome::rejected(self.score);
        }
        self.advance_turn(dest)
    }

    /// Signal that the external per-move countdown expired.
    pub fn expire_timer(&mut self) {
        if self.game_over.is_none() {
            info!(score = self.score, "timer expired");
            self.game_over = Some(GameOverReason::TimeExpired);
        }
    }

    /// Discard the run and restore the initial single-knight layout.
    /// The RNG keeps its state so a reset run is a fresh sequence.
    pub fn reset(&mut self) {
        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        *self = SurvivalGame::with_rng(rng);
        info!("survival game reset");
    }

    /// Move the player to any empty square. Cooldown: 3 turns.
    pub fn use_teleport(&mut self, dest: Square) -> Result<(), AbilityError> {
        self.ensure_live()?;
        if self.board.is_occupied(dest) {
            return Err(AbilityError::TargetOccupied { square: dest });
        }
        self.abilities.engage(AbilityKind::Teleport)?;
        self.relocate_player(dest);
        debug!(%dest, "teleport used");
        Ok(())
    }

    /// Exchange squares with the enemy on `enemy_sq`. Cooldown: 4 turns.
    pub fn use_swap(&mut self, enemy_sq: Square) -> Result<(), AbilityError> {
        self.ensure_live()?;
        let enemy = self.enemy_at(enemy_sq)?;
        self.abilities.engage(AbilityKind::Swap)?;
        let player_sq = self.player;
        self.board.remove(enemy_sq);
        self.relocate_player(enemy_sq);
        self.board.place(player_sq, enemy);
        debug!(%enemy_sq, "swap used");
        Ok(())
    }

    /// Arm a shield that absorbs the next enemy capture of the player.
    /// Cooldown: 5 turns.
    pub fn use_shield(&mut self) -> Result<(), AbilityError> {
        self.ensure_live()?;
        self.abilities.engage(AbilityKind::Shield)?;
        self.shielded = true;
        debug!("shield armed");
        Ok(())
    }

    /// Remove the enemy on `enemy_sq` from the board. Cooldown: 8 turns.
    pub fn use_destroy(&mut self, enemy_sq: Square) -> Result<(), AbilityError> {
        self.ensure_live()?;
        self.enemy_at(enemy_sq)?;
        self.abilities.engage(AbilityKind::Destroy)?;
        self.board.remove(enemy_sq);
        debug!(%enemy_sq, "destroy used");
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), AbilityError> {
        if self.game_over.is_some() {
            return Err(AbilityError::GameOver);
        }
        Ok(())
    }

    fn enemy_at(&self, sq: Square) -> Result<Piece, AbilityError> {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color() == Color::Dark => Ok(piece),
            _ => Err(AbilityError::NoEnemyAt { square: sq }),
        }
    }

    fn relocate_player(&mut self, dest: Square) {
        self.board.remove(self.player);
        self.board.place(dest, Piece::LIGHT_KNIGHT);
        self.player = dest;
    }

    fn advance_turn(&mut self, dest: Square) -> TurnOutcome {
        let captured = self.board.remove(dest);
        if captured.is_some() {
            self.score += 1;
        }
        self.relocate_player(dest);

        self.spawn_enemy();
        self.move_enemies();
        self.abilities.tick();
        self.turn_count += 1;

        TurnOutcome {
            applied: true,
            captured,
            score: self.score,
        }
    }

    fn enemy_squares(&self) -> Vec<Square> {
        let mut squares = self.board.squares_of(Color::Dark);
        // Stable order so seeded runs replay identically
        squares.sort();
        squares
    }

    /// One spawn attempt: a random square on a random border side gets
    /// a random dark knight or bishop. The attempt is dropped when the
    /// square is occupied or the enemy cap is reached.
    fn spawn_enemy(&mut self) {
        if self.enemy_squares().len() >= MAX_ENEMIES {
            return;
        }

        let (file, rank) = match self.rng.gen_range(0..4u8) {
            0 => (self.rng.gen_range(0..8u8), 0),
            1 => (7, self.rng.gen_range(0..8u8)),
            2 => (self.rng.gen_range(0..8u8), 7),
            _ => (0, self.rng.gen_range(0..8u8)),
        };
        let pos = Square::at(file, rank).expect("spawn coordinates are on the board");
        if self.board.is_occupied(pos) {
            return;
        }

        let kind = if self.rng.gen_bool(0.5) {
            PieceKind::Bishop
        } else {
            PieceKind::Knight
        };
        self.board.place(pos, Piece::new(kind, Color::Dark));
        debug!(%pos, kind = %kind, "enemy spawned");
    }

    /// Every enemy takes the valid step minimizing Manhattan distance
    /// to the player. An enemy landing on the player ends the game
    /// unless a shield absorbs the capture.
    fn move_enemies(&mut self) {
        for pos in self.enemy_squares() {
            let Some(best) = reduced_destinations(&self.board, pos)
                .into_iter()
                .min_by_key(|&dest| manhattan(dest, self.player))
            else {
                continue;
            };
            let Some(enemy) = self.board.remove(pos) else {
                continue;
            };

            if best == self.player {
                if self.shielded {
                    // Capture absorbed; the enemy's move is blocked
                    self.shielded = false;
                    self.board.place(pos, enemy);
                    debug!(%pos, "shield absorbed a capture");
                    continue;
                }
                self.board.place(best, enemy);
                info!(score = self.score, "player captured");
                self.game_over = Some(GameOverReason::Captured);
                return;
            }

            self.board.place(best, enemy);
        }
    }
}

impl Default for SurvivalGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Destinations under the reduced survival rules: knight steps, and
/// bishop rays cut down to a single diagonal step. Other piece kinds
/// do not occur in this variant and get no moves.
fn reduced_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_moves(board, from)
        .into_iter()
        .map(|mv| mv.dest())
        .filter(|&dest| match piece.kind() {
            PieceKind::Knight => true,
            PieceKind::Bishop => chebyshev(from, dest) == 1,
            _ => false,
        })
        .collect()
}

fn chebyshev(a: Square, b: Square) -> u8 {
    let df = (a.file() as i8 - b.file() as i8).unsigned_abs();
    let dr = (a.rank() as i8 - b.rank() as i8).unsigned_abs();
    df.max(dr)
}

fn manhattan(a: Square, b: Square) -> u8 {
    let df = (a.file() as i8 - b.file() as i8).unsigned_abs();
    let dr = (a.rank() as i8 - b.rank() as i8).unsigned_abs();
    df + dr
}

#[cfg(test)]
mod tests {
    use super::{MAX_ENEMIES, SurvivalGame, manhattan, reduced_destinations};
    use crate::abilities::AbilityKind;
    use crate::error::AbilityError;
    use crate::outcome::GameOverReason;
    use scacco_core::{Board, Color, Piece, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::at(file, rank).unwrap()
    }

    #[test]
    fn fresh_game_layout() {
        let game = SurvivalGame::with_seed(7);
        assert_eq!(game.player(), sq(4, 4));
        assert_eq!(game.board().piece_count(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.valid_moves().len(), 8);
        assert!(!game.is_game_over());
    }

    #[test]
    fn start_spawns_edge_enemies() {
        let mut game = SurvivalGame::with_seed(42);
        game.start();
        let enemies = game.board().squares_of(Color::Dark);
        assert!(enemies.len() <= 3);
        for sq in enemies {
            assert!(
                sq.file() == 0 || sq.file() == 7 || sq.rank() == 0 || sq.rank() == 7,
                "enemy spawned off the border: {sq:?}"
            );
        }
    }

    #[test]
    fn play_turn_rejects_bad_index() {
        let mut game = SurvivalGame::with_seed(1);
        let outcome = game.play_turn(8);
        assert!(!outcome.applied);
        assert_eq!(game.player(), sq(4, 4));
        assert_eq!(game.turn_count(), 0);
    }

    #[test]
    fn play_turn_moves_player_and_advances() {
        let mut game = SurvivalGame::with_seed(1);
        let dest = game.valid_moves()[0];
        let outcome = game.play_turn(0);
        assert!(outcome.applied);
        assert_eq!(game.player(), dest);
        assert_eq!(game.turn_count(), 1);
        if !game.is_game_over() {
            assert_eq!(game.board().piece_at(dest), Some(Piece::LIGHT_KNIGHT));
        }
    }

    #[test]
    fn capturing_an_enemy_scores() {
        let mut game = SurvivalGame::with_seed(3);
        let dest = game.valid_moves()[0];
        game.board.place(dest, Piece::DARK_BISHOP);

        let outcome = game.play_turn_to(dest);
        assert!(outcome.applied);
        assert_eq!(outcome.captured, Some(Piece::DARK_BISHOP));
        assert_eq!(outcome.score, 1);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn bishop_takes_single_diagonal_steps() {
        let mut board = Board::empty();
        board.place(sq(3, 3), Piece::DARK_BISHOP);
        let dests = reduced_destinations(&board, sq(3, 3));
        assert_eq!(dests.len(), 4);
        assert!(dests.contains(&sq(4, 4)));
        assert!(!dests.contains(&sq(5, 5)));
    }

    #[test]
    fn enemy_steps_toward_player() {
        let mut game = SurvivalGame::with_seed(5);
        game.board.place(sq(0, 0), Piece::DARK_KNIGHT);

        let before = manhattan(sq(0, 0), game.player());
        game.move_enemies();
        let after = game
            .board()
            .squares_of(Color::Dark)
            .into_iter()
            .map(|e| manhattan(e, game.player()))
            .min()
            .unwrap();
        assert!(after < before, "enemy did not close distance");
    }

    #[test]
    fn enemy_reaching_player_ends_game() {
        let mut game = SurvivalGame::with_seed(5);
        game.board.place(sq(3, 3), Piece::DARK_BISHOP);
        game.move_enemies();
        assert!(game.is_game_over());
        assert_eq!(game.game_over_reason(), Some(GameOverReason::Captured));
        // The enemy now occupies the player's square
        assert_eq!(game.board().piece_at(sq(4, 4)), Some(Piece::DARK_BISHOP));
    }

    #[test]
    fn shield_absorbs_one_capture() {
        let mut game = SurvivalGame::with_seed(5);
        game.board.place(sq(3, 3), Piece::DARK_BISHOP);
        game.use_shield().unwrap();

        game.move_enemies();
        assert!(!game.is_game_over());
        assert!(!game.is_shielded());
        // The blocked enemy stayed put
        assert_eq!(game.board().piece_at(sq(3, 3)), Some(Piece::DARK_BISHOP));

        // A second attempt goes through
        game.move_enemies();
        assert!(game.is_game_over());
    }

    #[test]
    fn spawn_respects_enemy_cap() {
        let mut game = SurvivalGame::with_seed(9);
        for file in 0..MAX_ENEMIES as u8 {
            game.board.place(sq(file, 0), Piece::DARK_KNIGHT);
        }
        game.spawn_enemy();
        assert_eq!(game.board().squares_of(Color::Dark).len(), MAX_ENEMIES);
    }

    #[test]
    fn teleport_to_empty_square() {
        let mut game = SurvivalGame::with_seed(2);
        game.use_teleport(sq(0, 3)).unwrap();
        assert_eq!(game.player(), sq(0, 3));
        assert!(!game.abilities().is_available(AbilityKind::Teleport));
    }

    #[test]
    fn teleport_rejects_occupied_target() {
        let mut game = SurvivalGame::with_seed(2);
        game.board.place(sq(0, 3), Piece::DARK_KNIGHT);
        assert_eq!(
            game.use_teleport(sq(0, 3)),
            Err(AbilityError::TargetOccupied { square: sq(0, 3) })
        );
        // The failed attempt did not start the cooldown
        assert!(game.abilities().is_available(AbilityKind::Teleport));
    }

    #[test]
    fn swap_exchanges_player_and_enemy() {
        let mut game = SurvivalGame::with_seed(2);
        game.board.place(sq(7, 7), Piece::DARK_BISHOP);
        game.use_swap(sq(7, 7)).unwrap();
        assert_eq!(game.player(), sq(7, 7));
        assert_eq!(game.board().piece_at(sq(4, 4)), Some(Piece::DARK_BISHOP));
    }

    #[test]
    fn destroy_removes_enemy() {
        let mut game = SurvivalGame::with_seed(2);
        game.board.place(sq(7, 0), Piece::DARK_KNIGHT);
        game.use_destroy(sq(7, 0)).unwrap();
        assert_eq!(game.board().piece_at(sq(7, 0)), None);
        assert_eq!(
            game.use_destroy(sq(7, 0)),
            Err(AbilityError::NoEnemyAt { square: sq(7, 0) })
        );
    }

    #[test]
    fn abilities_fail_after_game_over() {
        let mut game = SurvivalGame::with_seed(2);
        game.expire_timer();
        assert_eq!(game.use_shield(), Err(AbilityError::GameOver));
        assert!(!game.play_turn(0).applied);
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn cooldowns_tick_once_per_turn() {
        let mut game = SurvivalGame::with_seed(11);
        game.use_shield().unwrap();
        assert_eq!(game.abilities().remaining(AbilityKind::Shield), 5);
        game.play_turn(0);
        assert_eq!(game.abilities().remaining(AbilityKind::Shield), 4);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut game = SurvivalGame::with_seed(13);
        game.start();
        game.play_turn(0);
        game.use_shield().ok();
        game.reset();
        assert_eq!(game.player(), sq(4, 4));
        assert_eq!(game.board().piece_count(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.turn_count(), 0);
        assert!(!game.is_shielded());
        assert!(!game.is_game_over());
    }
}
