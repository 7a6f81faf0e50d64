use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::MatchEngine;
use profile_store::{fingerprint, loader, MemoryStore, ProfileStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Mingle - interest-based user matchmaking engine
#[derive(Parser)]
#[command(name = "mingle")]
#[command(about = "Recommend users by interest-fingerprint similarity", long_about = None)]
struct Cli {
    /// Path to a JSON export of user records
    #[arg(short, long, default_value = "data/users.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend matching users for a requester
    Recommend {
        /// User id to recommend matches for
        #[arg(long)]
        user_id: String,

        /// Maximum number of matches to return
        #[arg(long, default_value = "10")]
        quota: usize,

        /// Minimum candidate age (inclusive)
        #[arg(long, default_value = "18")]
        min_age: u8,

        /// Maximum candidate age (inclusive)
        #[arg(long, default_value = "120")]
        max_age: u8,

        /// Show age and shared interests for each match
        #[arg(long)]
        explain: bool,
    },

    /// Show a user's profile, fingerprint, and bucket peers
    User {
        /// User id to display
        #[arg(long)]
        user_id: String,
    },

    /// List fingerprint buckets by member count
    Buckets {
        /// Number of buckets to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset (this may take a moment)
    println!("Loading user dataset from {}...", cli.data.display());
    let start = Instant::now();
    let store = Arc::new(
        loader::load_from_file(&cli.data).context("Failed to load user dataset")?,
    );
    let (users, buckets) = store.counts();
    println!(
        "{} Loaded {} users in {} buckets in {:?}",
        "✓".green(),
        users,
        buckets,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            user_id,
            quota,
            min_age,
            max_age,
            explain,
        } => handle_recommend(store, user_id, quota, min_age, max_age, explain).await?,
        Commands::User { user_id } => handle_user(store, user_id)?,
        Commands::Buckets { limit } => handle_buckets(store, limit)?,
        Commands::Benchmark { requests } => handle_benchmark(store, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    store: Arc<MemoryStore>,
    user_id: String,
    quota: usize,
    min_age: u8,
    max_age: u8,
    explain: bool,
) -> Result<()> {
    let requester = store
        .get_user(&user_id)
        .with_context(|| format!("Cannot recommend for {}", user_id))?;

    let matcher = MatchEngine::new(store.clone());
    let recommendation = matcher.recommend(&user_id, quota, min_age, max_age).await?;

    println!(
        "{}",
        format!("Matches for {} (ages {}-{}):", user_id, min_age, max_age)
            .bold()
            .blue()
    );
    if recommendation.matches.is_empty() {
        println!("  (no matching users)");
    }
    for (i, id) in recommendation.matches.iter().enumerate() {
        if explain {
            match store.get_user(id) {
                Ok(record) => {
                    let shared = record
                        .interests
                        .iter()
                        .filter(|tag| requester.interests.contains(tag))
                        .count();
                    println!(
                        "{}. {} (age {}, {} shared interests)",
                        (i + 1).to_string().green(),
                        id,
                        record.age,
                        shared
                    );
                }
                Err(_) => println!("{}. {}", (i + 1).to_string().green(), id),
            }
        } else {
            println!("{}. {}", (i + 1).to_string().green(), id);
        }
    }

    if recommendation.matches.len() < quota {
        println!(
            "Partial result: {} of {} requested (candidate pool exhausted)",
            recommendation.matches.len(),
            quota
        );
    }
    println!(
        "Scanned {} buckets in {:.4}s",
        recommendation.buckets_scanned, recommendation.elapsed_seconds
    );
    Ok(())
}

/// Handle the 'user' command
fn handle_user(store: Arc<MemoryStore>, user_id: String) -> Result<()> {
    let record = store
        .get_user(&user_id)
        .with_context(|| format!("Cannot show user {}", user_id))?;
    let fp = fingerprint::encode(&record.interests)?;

    print!("{}", format!("User ID: {}\n", record.id).bold().blue());
    print!("{}Age: {}\n", "• ".green(), record.age);
    print!("{}Interests: {}\n", "• ".green(), record.interests.join(", "));
    print!("{}Fingerprint: {:?}\n", "• ".green(), fp);

    // Everyone who shares this user's bucket
    let peers: Vec<String> = store
        .get_bucket(&fp)?
        .into_iter()
        .filter(|id| *id != record.id)
        .collect();
    print!("{}Bucket peers: {}\n", "• ".cyan(), peers.len());
    for peer in peers {
        print!("  - {}\n", peer);
    }
    Ok(())
}

/// Handle the 'buckets' command
fn handle_buckets(store: Arc<MemoryStore>, limit: usize) -> Result<()> {
    let mut census: Vec<(String, usize)> = store
        .list_fingerprints()?
        .into_iter()
        .map(|fp| {
            let members = store.get_bucket(&fp).map(|m| m.len()).unwrap_or(0);
            (fp, members)
        })
        .collect();

    // Largest buckets first, then lexicographic for stable output
    census.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!("{}", "Fingerprint buckets:".bold().blue());
    for (fp, members) in census.iter().take(limit) {
        println!("{:>6}  {:?}", members, fp);
    }
    if census.len() > limit {
        println!("... and {} more", census.len() - limit);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(store: Arc<MemoryStore>, requests: usize) -> Result<()> {
    let user_ids = store.user_ids();
    if user_ids.is_empty() {
        anyhow::bail!("Dataset has no users to benchmark with");
    }

    let matcher = MatchEngine::new(store.clone());

    // Use tokio::spawn to make concurrent requests against random users
    let mut handles = vec![];
    for _ in 0..requests {
        let idx = rand::random::<u32>() as usize % user_ids.len();
        let user_id = user_ids[idx].clone();
        let matcher = matcher.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            matcher.recommend(&user_id, 10, 18, 120).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
