//! `pairsofwords`: count adjacent word pairs across text files and write
//! them, most frequent first, to a report file.
//!
//! Usage:
//!   pairsofwords book.txt                  # every pair, to output.txt
//!   pairsofwords -10 a.txt b.txt           # top 10 pairs
//!   pairsofwords --count 10 -o top.txt a.txt

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use pairsofwords::report::{collect_pairs, count_pairs, sort_pairs, write_report};
use pairsofwords::{FreqTable, TableConfig};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pairsofwords", version, about = "Count adjacent word pairs in text files")]
struct Args {
    /// Number of pairs to report; 0 reports all. `-<count>` as the first
    /// argument is accepted as well.
    #[arg(long, default_value_t = 0)]
    count: usize,

    /// Report file.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Buckets allocated before the first insert.
    #[arg(long, default_value_t = pairsofwords::config::DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,

    /// Load factor above which the table grows.
    #[arg(long, default_value_t = pairsofwords::config::DEFAULT_MAX_LOAD)]
    max_load: f64,

    /// Capacity multiplier applied on growth.
    #[arg(long, default_value_t = pairsofwords::config::DEFAULT_GROWTH_FACTOR)]
    growth_factor: usize,

    /// Input files. Pairs never span two files.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Args {
    fn table_config(&self) -> TableConfig {
        TableConfig::new(self.initial_capacity, self.max_load).with_growth_factor(self.growth_factor)
    }
}

/// Rewrite a leading `-<count>` argument into `--count=<count>`.
fn normalize_args<I>(args: I) -> color_eyre::Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    let Some(first) = args.get(1).and_then(|a| a.to_str()) else {
        return Ok(args);
    };
    if first == "-" {
        bail!("expected -<count> but got \"-\"");
    }
    if let Some(count) = first.strip_prefix('-') {
        if count.starts_with(|c: char| c.is_ascii_digit()) {
            if !count.bytes().all(|b| b.is_ascii_digit()) {
                bail!("-count must be a base-10 integer, not \"{count}\"");
            }
            let rewritten = OsString::from(format!("--count={count}"));
            args[1] = rewritten;
        }
    }
    Ok(args)
}

fn setup_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or("PAIRSOFWORDS_LOG", "warn")
            .write_style("PAIRSOFWORDS_LOG_STYLE"),
    )
    .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    setup_logging();
    let begin = Instant::now();

    let args = Args::parse_from(normalize_args(std::env::args_os())?);
    let mut table: FreqTable<String> =
        FreqTable::try_with_config(args.table_config()).wrap_err("invalid table parameters")?;

    for path in &args.files {
        let file = File::open(path)
            .wrap_err_with(|| format!("file {} was not found", path.display()))?;
        let inserted = count_pairs(&mut table, BufReader::new(file))
            .wrap_err_with(|| format!("failed reading {}", path.display()))?;
        log::info!(
            "{}: {} pairs, table now {} distinct in {} buckets",
            path.display(),
            inserted,
            table.len(),
            table.capacity()
        );
    }

    let mut pairs = collect_pairs(&table);
    sort_pairs(&mut pairs);

    let out = File::create(&args.output)
        .wrap_err_with(|| format!("could not open output file {}", args.output.display()))?;
    let mut out = BufWriter::new(out);
    write_report(&mut out, &pairs, args.count)?;
    out.flush()?;

    println!(
        "Process finished, final table had {} collisions",
        table.collisions()
    );
    table.destroy();

    println!(
        "Process completed in {:.6} seconds",
        begin.elapsed().as_secs_f64()
    );
    Ok(())
}
