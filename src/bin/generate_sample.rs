use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Write a synthetic dataset of scored posts for the dashboard.
#[derive(Debug, Parser)]
struct Args {
    /// Number of posts to generate.
    #[arg(long, default_value_t = 500)]
    count: usize,

    /// Output file; `.parquet` or `.json`.
    #[arg(long, default_value = "sample_posts.parquet")]
    output: PathBuf,

    /// RNG seed, for reproducible files.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct Post {
    name: String,
    handle: String,
    reply: String,
    sentiment: f64,
}

const FIRST: &[&str] = &[
    "Tech", "Data", "Cautious", "Curious", "Product", "Privacy", "Startup", "Security", "Future",
    "Pragmatic",
];
const SECOND: &[&str] = &[
    "Critic", "Enthusiast", "Observer", "Founder", "Analyst", "Advocate", "Dev", "Researcher",
    "Thinker", "User",
];

const NEGATIVE: &[&str] = &[
    "Overhyped. Doesn't solve the real problem.",
    "Seen similar promises before. Doubtful it'll deliver.",
    "Raises serious privacy concerns.",
];
const NEUTRAL: &[&str] = &[
    "Interesting concept, but how practical is it?",
    "I'll wait for more real-world testing.",
    "Promising, but what about the security implications?",
];
const POSITIVE: &[&str] = &[
    "This is amazing! I love this!",
    "Could be a game-changer for our field!",
    "Solid implementation. Looking forward to testing it.",
];

/// Right-skewed mixture: most replies lean positive, a negative cluster
/// sits near the bottom. Two decimals, like a classifier score.
fn sentiment(rng: &mut StdRng) -> f64 {
    let raw: f64 = if rng.gen_bool(0.7) {
        1.0 - rng.gen::<f64>().powi(2) * 0.6
    } else {
        rng.gen::<f64>().powi(2) * 0.5
    };
    (raw.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn generate(count: usize, rng: &mut StdRng) -> Vec<Post> {
    (0..count)
        .map(|i| {
            let first = FIRST.choose(rng).copied().unwrap_or("Anon");
            let second = SECOND.choose(rng).copied().unwrap_or("User");
            let score = sentiment(rng);
            let pool = match score {
                s if s < 0.35 => NEGATIVE,
                s if s < 0.65 => NEUTRAL,
                _ => POSITIVE,
            };
            Post {
                name: format!("{first} {second}"),
                handle: format!("@{}_{}_{i}", first.to_lowercase(), second.to_lowercase()),
                reply: pool.choose(rng).copied().unwrap_or_default().to_string(),
                sentiment: score,
            }
        })
        .collect()
}

fn write_parquet(posts: &[Post], path: &PathBuf) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("handle", DataType::Utf8, false),
        Field::new("reply", DataType::Utf8, false),
        Field::new("sentiment", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.name.as_str()))),
            Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.handle.as_str()))),
            Arc::new(StringArray::from_iter_values(posts.iter().map(|p| p.reply.as_str()))),
            Arc::new(Float64Array::from_iter_values(posts.iter().map(|p| p.sentiment))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn write_json(posts: &[Post], path: &PathBuf) -> Result<()> {
    let file = std::fs::File::create(path).context("creating output file")?;
    serde_json::to_writer_pretty(file, posts).context("writing JSON")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let posts = generate(args.count, &mut rng);

    let ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "parquet" | "pq" => write_parquet(&posts, &args.output)?,
        "json" => write_json(&posts, &args.output)?,
        other => bail!("Unsupported output extension: .{other}"),
    }

    log::info!("Wrote {} posts to {}", posts.len(), args.output.display());
    println!("Wrote {} posts to {}", posts.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let posts = generate(1_000, &mut rng);
        assert_eq!(posts.len(), 1_000);
        assert!(posts.iter().all(|p| (0.0..=1.0).contains(&p.sentiment)));
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = generate(20, &mut StdRng::seed_from_u64(3));
        let b = generate(20, &mut StdRng::seed_from_u64(3));
        assert!(a.iter().zip(&b).all(|(x, y)| x.handle == y.handle && x.sentiment == y.sentiment));
    }
}
