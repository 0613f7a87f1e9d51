use std::{fs, path::PathBuf};

use anyhow::Context as _;
use rectris_engine::{GameSession, Player, ScoreWeights, Shape, StepOutcome, Strategy, parse_shapes};

use crate::render;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// File of whitespace-separated integers, read pairwise as width/height
    shapes: PathBuf,
    /// Board width in cells
    #[clap(long, default_value_t = 10)]
    width: usize,
    /// Board height in cells
    #[clap(long, default_value_t = 10)]
    height: usize,
    /// Placement method: "simple" or "expert"
    #[clap(long, default_value = "simple")]
    method: Strategy,
    /// JSON file overriding the expert scoring weights
    #[clap(long)]
    weights: Option<PathBuf>,
    /// Only print the final summary, not the board after each placement
    #[clap(long)]
    quiet: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        shapes,
        width,
        height,
        method,
        weights,
        quiet,
    } = arg;

    let input = fs::read_to_string(shapes)
        .with_context(|| format!("failed to read {}", shapes.display()))?;
    let blocks = parse_shapes(&input)
        .with_context(|| format!("malformed shape sequence in {}", shapes.display()))?;

    let board_shape = Shape::new(*width, *height).context("board dimensions must be positive")?;
    let mut player = Player::new(board_shape, *method);
    if let Some(path) = weights {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let weights: ScoreWeights = serde_json::from_str(&json)
            .with_context(|| format!("malformed weights in {}", path.display()))?;
        player = player.with_weights(weights);
    }

    let mut session = GameSession::new(player);
    if !quiet {
        println!("{}", render::board(session.player().board()));
    }
    for &block in &blocks {
        anyhow::ensure!(
            session.player().is_legal(block),
            "shape {block} cannot fit on a {board_shape} board",
        );
        match session.step(block)? {
            StepOutcome::Placed { .. } => {
                if !quiet {
                    println!("{}", render::board(session.player().board()));
                }
            }
            StepOutcome::NoRoom => break,
        }
    }

    let cleared = session.lines_cleared();
    println!(
        "placed {}/{} shapes ({} rows and {} columns cleared)",
        session.placed(),
        blocks.len(),
        cleared.rows,
        cleared.columns,
    );
    Ok(())
}
