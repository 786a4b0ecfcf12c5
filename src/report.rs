//! Word-pair counting and the frequency report built from a table.

use crate::freq_table::FreqTable;
use crate::tokenize::{pairs, words};
use core::hash::BuildHasher;
use std::cmp::Ordering;
use std::io::{self, BufRead, Write};

/// One row of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairCount<'a> {
    pub key: &'a str,
    pub frequency: usize,
}

/// Tokenize `reader` and insert every adjacent word pair into `table`.
/// Returns the number of pairs inserted.
pub fn count_pairs<R, S>(table: &mut FreqTable<String, S>, reader: R) -> io::Result<usize>
where
    R: BufRead,
    S: BuildHasher,
{
    let mut inserted = 0;
    for pair in pairs(words(reader)) {
        table.insert(pair?);
        inserted += 1;
    }
    Ok(inserted)
}

/// Read every `(key, frequency)` pair by walking each bucket's chain.
pub fn collect_pairs<S>(table: &FreqTable<String, S>) -> Vec<PairCount<'_>> {
    let mut out = Vec::with_capacity(table.len());
    for bucket in table.buckets() {
        for (key, frequency) in bucket {
            out.push(PairCount {
                key: key.as_str(),
                frequency,
            });
        }
    }
    out
}

/// Most frequent first; equal frequencies in ascending byte order of the key.
pub fn report_order(a: &PairCount<'_>, b: &PairCount<'_>) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.key.as_bytes().cmp(b.key.as_bytes()))
}

pub fn sort_pairs(pairs: &mut [PairCount<'_>]) {
    pairs.sort_unstable_by(report_order);
}

/// Write one `"{frequency:>10} {key}"` line per pair. `limit == 0` writes
/// every pair; a limit past the end is clamped.
pub fn write_report<W: Write>(out: &mut W, pairs: &[PairCount<'_>], limit: usize) -> io::Result<()> {
    let shown = if limit == 0 {
        pairs.len()
    } else {
        limit.min(pairs.len())
    };
    for p in &pairs[..shown] {
        writeln!(out, "{:>10} {}", p.frequency, p.key)?;
    }
    Ok(())
}
