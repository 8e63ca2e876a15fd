use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sa_search::index::SuffixArray;
use sa_search::io::fasta;
use sa_search::report::{self, RunMeta};
use sa_search::search::{self, BatchOptions, ExactMatcher, MatchSet, NaiveMatcher, SuffixArraySearcher};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "sa-search", author, version, about = "Exact read search: naive scan vs suffix array", arg_required_else_help = true)]
struct Cli {
    /// Log progress and timings at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search every query with a sliding-window scan
    Naive(SearchArgs),
    /// Build a suffix array once, then binary-search every query
    #[command(alias = "sa")]
    Suffixarray(SearchArgs),
    /// Run both strategies and fail if any query's hits differ
    Compare(SearchArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Reference FASTA file (.gz accepted); all records are concatenated
    #[arg(short, long)]
    reference: PathBuf,
    /// Query FASTA file (.gz accepted)
    #[arg(short, long)]
    query: PathBuf,
    /// Number of queries to run; the query set is repeated or truncated to fit
    #[arg(long = "query-ct", alias = "query_ct")]
    query_ct: Option<usize>,
    /// Worker threads for the query batch (0 = all cores)
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("sa_search=debug,info")
    } else {
        EnvFilter::new("sa_search=info,warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Naive(args) => run_naive(&args),
        Commands::Suffixarray(args) => run_suffixarray(&args),
        Commands::Compare(args) => run_compare(&args),
    }
}

struct Inputs {
    reference: Vec<u8>,
    queries: Vec<Vec<u8>>,
}

fn load_inputs(args: &SearchArgs) -> Result<Inputs> {
    let reference = fasta::read_reference(&args.reference)
        .with_context(|| format!("cannot load reference FASTA '{}'", args.reference.display()))?;
    let loaded = fasta::read_queries(&args.query)
        .with_context(|| format!("cannot load query FASTA '{}'", args.query.display()))?;

    let count = args.query_ct.unwrap_or(loaded.len());
    let queries = search::replicate_queries(&loaded, count)
        .with_context(|| format!("query file '{}'", args.query.display()))?;

    info!(
        reference_len = reference.len(),
        loaded = loaded.len(),
        queries = queries.len(),
        "inputs loaded"
    );
    Ok(Inputs { reference, queries })
}

fn run_batch<M: ExactMatcher>(matcher: &M, queries: &[Vec<u8>], threads: usize) -> Result<Vec<MatchSet>> {
    let t0 = Instant::now();
    let results = search::search_batch(matcher, queries, BatchOptions { threads })?;
    info!(
        strategy = matcher.name(),
        queries = queries.len(),
        elapsed_s = t0.elapsed().as_secs_f64(),
        "search finished"
    );
    Ok(results)
}

fn write_output(out: Option<&Path>, meta: &RunMeta, results: &[MatchSet]) -> Result<()> {
    let mut w: Box<dyn Write> = match out {
        Some(p) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p.display()))?,
        )),
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    };
    report::write_results(&mut w, meta, results).context("cannot write results")?;
    Ok(())
}

fn run_naive(args: &SearchArgs) -> Result<()> {
    let input = load_inputs(args)?;
    let matcher = NaiveMatcher::new(&input.reference);
    let results = run_batch(&matcher, &input.queries, args.threads)?;
    let meta = RunMeta::new(matcher.name(), input.reference.len(), input.queries.len());
    write_output(args.out.as_deref(), &meta, &results)
}

fn run_suffixarray(args: &SearchArgs) -> Result<()> {
    let input = load_inputs(args)?;
    let index = SuffixArray::build(&input.reference).context("cannot build suffix array")?;
    let matcher = SuffixArraySearcher::new(&index);
    let results = run_batch(&matcher, &input.queries, args.threads)?;
    let meta = RunMeta::new(matcher.name(), input.reference.len(), input.queries.len());
    write_output(args.out.as_deref(), &meta, &results)
}

fn run_compare(args: &SearchArgs) -> Result<()> {
    let input = load_inputs(args)?;
    let index = SuffixArray::build(&input.reference).context("cannot build suffix array")?;
    let sa = SuffixArraySearcher::new(&index);
    let naive = NaiveMatcher::new(&input.reference);

    let sa_results = run_batch(&sa, &input.queries, args.threads)?;
    let naive_results = run_batch(&naive, &input.queries, args.threads)?;

    for (qi, (a, b)) in sa_results.iter().zip(&naive_results).enumerate() {
        if !a.same_positions(b) {
            anyhow::bail!(
                "query {} disagrees: suffixarray found {} hits, naive found {}",
                qi,
                a.len(),
                b.len()
            );
        }
    }
    info!(queries = input.queries.len(), "all queries agree");

    let meta = RunMeta::new("compare", input.reference.len(), input.queries.len());
    write_output(args.out.as_deref(), &meta, &sa_results)
}
