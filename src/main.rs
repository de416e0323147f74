use std::fmt::Display;

use anyhow::{ensure, Context, Result};
use balanced_bst::Tree;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upper bound on how many random values a single run draws.
const MAX_RANDOM_VALUES: usize = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "balanced-bst",
    about = "Build a balanced binary search tree, unbalance it and rebalance it"
)]
struct Cli {
    /// Values to build the tree from. Random values are drawn when none are given.
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    values: Vec<i64>,
    /// How many random values to draw, at most a million (default: somewhere from 5 to 10).
    #[arg(long)]
    count: Option<usize>,
    /// Smallest random starting value.
    #[arg(long, default_value_t = 0)]
    min: i64,
    /// Largest random starting value.
    #[arg(long, default_value_t = 100)]
    max: i64,
    /// How many values to insert to unbalance the tree, at most a million.
    #[arg(long, default_value_t = 3)]
    extra: usize,
    /// Smallest value inserted to unbalance the tree.
    #[arg(long, default_value_t = 101)]
    extra_min: i64,
    /// Largest value inserted to unbalance the tree.
    #[arg(long, default_value_t = 200)]
    extra_max: i64,
    /// Seed for reproducible random values.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let values = if cli.values.is_empty() {
        let count = cli.count.unwrap_or_else(|| rng.gen_range(5..=10));
        random_values(&mut rng, count, cli.min, cli.max)
            .context("failed to draw starting values")?
    } else {
        cli.values
    };
    info!(count = values.len(), "building tree");

    let mut tree = Tree::from_values(values);
    report(&tree);

    let extra = random_values(&mut rng, cli.extra, cli.extra_min, cli.extra_max)
        .context("failed to draw values to unbalance the tree")?;
    println!(
        "\n\n\nAttempting to unbalance tree, adding {}...\n",
        join(&extra)
    );
    tree.extend(extra);
    println!("{tree}");
    println!("Balanced? {}", tree.is_balanced());

    tree.rebalance();
    println!("\n\n\nAttempting to rebalance...\n");
    report(&tree);

    Ok(())
}

fn random_values(rng: &mut StdRng, count: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    ensure!(
        count <= MAX_RANDOM_VALUES,
        "refusing to draw {count} values, the limit is {MAX_RANDOM_VALUES}"
    );
    ensure!(min <= max, "empty range: {min} is larger than {max}");
    Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
}

/// Prints the tree, whether it is balanced and all four traversals.
fn report(tree: &Tree<i64>) {
    println!("{tree}");
    println!("Balanced? {}", tree.is_balanced());
    println!("Level order: {}", join(tree.level_order()));
    println!("Preorder: {}", join(tree.preorder()));
    println!("Postorder: {}", join(tree.postorder()));
    println!("Inorder: {}", join(tree.inorder()));
}

fn join<'a, T>(values: impl IntoIterator<Item = &'a T>) -> String
where
    T: Display + 'a,
{
    values
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
