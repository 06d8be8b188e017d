use anyhow::{Context, Result};
use tracing::info;

use scacco_core::Square;
use scacco_game::ChessGame;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("scacco starting");

    let game = ChessGame::new();
    println!("{}", game.board().pretty());

    let from = Square::at(4, 6).context("square off the board")?;
    let moves: Vec<String> = game
        .legal_moves(from)
        .iter()
        .map(|mv| mv.to_string())
        .collect();
    println!("moves from {from}: {}", moves.join(" "));

    info!(side_to_move = %game.side_to_move(), "ready");
    Ok(())
}
