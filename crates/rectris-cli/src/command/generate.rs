use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::Context as _;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of shapes to generate
    #[clap(long, default_value_t = 50)]
    count: usize,
    /// Largest width a generated shape may have
    #[clap(long, default_value_t = 4)]
    max_width: usize,
    /// Largest height a generated shape may have
    #[clap(long, default_value_t = 4)]
    max_height: usize,
    /// Seed for a reproducible sequence
    #[clap(long)]
    seed: Option<u64>,
    /// Output file; stdout when omitted
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        count,
        max_width,
        max_height,
        seed,
        output,
    } = arg;
    anyhow::ensure!(
        *max_width >= 1 && *max_height >= 1,
        "shape dimensions must be positive",
    );

    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(*seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let sequence = shape_sequence(&mut rng, *count, *max_width, *max_height);

    match output {
        Some(path) => fs::write(path, &sequence)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{sequence}"),
    }
    Ok(())
}

/// One `width height` pair per line, in the piece-source text encoding.
fn shape_sequence<R>(rng: &mut R, count: usize, max_width: usize, max_height: usize) -> String
where
    R: Rng + ?Sized,
{
    let mut out = String::new();
    for _ in 0..count {
        let width = rng.random_range(1..=max_width);
        let height = rng.random_range(1..=max_height);
        writeln!(&mut out, "{width} {height}").unwrap();
    }
    out
}
