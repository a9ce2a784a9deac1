use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redblacktree::RedBlackTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CSV_HEADER: &str = "Number of Entries,Tree Height";

// Height profile: insert TREE_SIZE random keys, recording (entries, height)
// after every insert to INSERT_OUTPUT, then delete 0..TREE_SIZE in order,
// recording after every removal to OUTPUT.
// Configurable via env vars; run with `--features profiling`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("REDBLACKTREE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let tree_size: u32 = std::env::var("TREE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(100_000);
    let seed: u64 = std::env::var("SEED")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(42);
    let insert_output =
        std::env::var("INSERT_OUTPUT").unwrap_or_else(|_| "RB_tree_data.csv".into());
    let output = std::env::var("OUTPUT").unwrap_or_else(|_| "RB_tree_data_removal.csv".into());

    tracing::info!(tree_size, seed, %insert_output, %output, "starting height profile");

    let mut rng = StdRng::seed_from_u64(seed);
    let keys: Vec<u32> = (0..tree_size).map(|_| rng.gen_range(0..tree_size)).collect();
    let mut tree = RedBlackTreeMap::try_with_capacity(tree_size as usize)?;

    let start = Instant::now();
    let mut csv = BufWriter::new(File::create(&insert_output)?);
    record_insertions(&mut tree, keys, &mut csv)?;
    csv.flush()?;
    tracing::info!(
        entries = tree.len(),
        height = tree.height(),
        elapsed = ?start.elapsed(),
        %insert_output,
        "finished inserting"
    );

    let start = Instant::now();
    let mut csv = BufWriter::new(File::create(&output)?);
    record_removals(&mut tree, 0..tree_size, &mut csv)?;
    csv.flush()?;
    tracing::info!(elapsed = ?start.elapsed(), %output, "finished removals");

    tree.check_invariants_detailed()?;
    Ok(())
}

/// Inserts each key (value = key) and writes one row per insert, then a
/// closing row with the final size and height.
fn record_insertions<W: Write>(
    tree: &mut RedBlackTreeMap<u32, u32>,
    keys: impl IntoIterator<Item = u32>,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{}", CSV_HEADER)?;
    for key in keys {
        tree.try_insert(key, key)?;
        write_row(tree, out)?;
    }
    write_row(tree, out)?;
    Ok(())
}

/// Removes each key and writes one row per removal attempt.
fn record_removals<W: Write>(
    tree: &mut RedBlackTreeMap<u32, u32>,
    keys: impl IntoIterator<Item = u32>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for key in keys {
        tree.remove(&key);
        write_row(tree, out)?;
    }
    Ok(())
}

fn write_row<W: Write>(tree: &RedBlackTreeMap<u32, u32>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{},{}", tree.len(), tree.height())
}
