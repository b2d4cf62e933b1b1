use clap::{ArgAction, Parser};
use copse::policy::DEFAULT_BREADTH_PROBABILITY;
use copse::{InsertPolicy, Tree, TreeError};
use rand::{rngs::StdRng, SeedableRng};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Grows a random multiway tree and takes it apart again
#[derive(Parser, Debug)]
#[command(name = "copse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random placement (default: from entropy)
    #[arg(short, long, env = "COPSE_SEED")]
    seed: Option<u64>,

    /// Number of values to insert: 1, 2, .., count
    #[arg(short = 'n', long, env = "COPSE_COUNT", default_value_t = 12)]
    count: u16,

    /// Chance of adding a direct child instead of descending
    #[arg(short, long, env = "COPSE_BREADTH", default_value_t = DEFAULT_BREADTH_PROBABILITY)]
    breadth: f64,

    /// Log verbosity, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TreeError> {
    let policy = InsertPolicy::new(cli.breadth)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut tree = Tree::new();
    for value in 1..=i32::from(cli.count) {
        tree.insert_with(value, &mut rng, &policy);
    }
    info!(size = tree.size(), depth = tree.depth(), "grown");

    print!("{}", tree);
    println!("size:    {}", tree.size());
    println!("depth:   {}", tree.depth());
    println!("average: {}", tree.average());
    println!("leaves:  {:?}", tree.leaves());

    let extra = i32::from(cli.count) + 1;
    if tree.insert_child(extra, &1) {
        println!("added {} under 1", extra);
    }
    if tree.delete_item(&1) {
        println!("deleted 1:");
        print!("{}", tree);
    }

    let mut extracted = vec![];
    while !tree.is_empty() {
        extracted.push(tree.extract_leaf()?);
    }
    println!("extracted: {:?}", extracted);
    debug!(count = extracted.len(), "tree emptied");

    // one more is a precondition violation
    if let Err(e) = tree.extract_leaf() {
        println!("{}", e);
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
