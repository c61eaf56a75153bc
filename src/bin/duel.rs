//! Terminal duel between the sheriff's ducks and the bandit's dog.
//!
//! Usage: `duel [speed]`. A speed of `0` plays instantly, `2` doubles
//! every pause. Set `RUST_LOG=duck_duel=debug` to watch each hit.

use std::rc::Rc;

use duck_duel::cards::catalog::{DOG, DUCK};
use duck_duel::cards::CardRegistry;
use duck_duel::core::{GameError, SpeedRate};
use duck_duel::game::{GameBuilder, GameResult};
use duck_duel::view::PacedView;

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<f64>() {
            Ok(speed) => SpeedRate::set(speed),
            Err(err) => tracing::warn!(%arg, %err, "ignoring unparsable speed"),
        }
    }

    let mut game = GameBuilder::new()
        .player_names("Sheriff Uclick", "Tex")
        .view(Rc::new(PacedView::default()))
        .build(CardRegistry::standard(), &[DUCK, DUCK, DUCK], &[DOG])?;

    let result = game.play_blocking(|winner| println!("{} wins!", winner.name))?;
    if result == GameResult::Draw {
        println!("Nobody wins.");
    }
    Ok(())
}
