// File: crates/demo/src/main.rs
// Summary: Demo loads nine-slice insets from CSV (or a built-in sample) and reports sums, emptiness and duplicates.

use anyhow::{Context, Result};
use clap::Parser;
use nine_slice_core::NineSlice;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "nine-slice-demo", about = "Inspect nine-slice inset definitions")]
struct Args {
    /// CSV file with one slice per row; uses a built-in sample when omitted
    input: Option<PathBuf>,

    /// Treat the first row as data and read columns in order (tlx, tly, brx, bry)
    #[arg(long)]
    no_headers: bool,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let slices = match &args.input {
        Some(path) => {
            log::info!("Using input file: {}", path.display());
            load_slices_csv(path, !args.no_headers, args.delimiter)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            log::info!("No input given; using built-in sample");
            sample_slices()
        }
    };
    log::info!("Loaded {} slices", slices.len());

    if slices.is_empty() {
        anyhow::bail!("no slices loaded; check headers/delimiter.");
    }

    for s in &slices {
        println!("{s}  sum_x={} sum_y={} empty={}", s.sum_x(), s.sum_y(), s.is_empty());
    }

    let distinct: HashSet<NineSlice> = slices.iter().copied().collect();
    println!("Distinct slices: {} of {}", distinct.len(), slices.len());
    for (s, n) in occurrences(&slices) {
        println!("  {s} x{n}");
    }

    Ok(())
}

fn sample_slices() -> Vec<NineSlice> {
    vec![
        NineSlice::new(8, 8, 8, 8),
        NineSlice::new(16, 12, 16, 20),
        NineSlice::new(0, 0, 0, 0),
        NineSlice::new(4, -4, 0, 0),
        NineSlice::new(8, 8, 8, 8),
    ]
}

/// Count each slice, keeping first-seen order.
fn occurrences(slices: &[NineSlice]) -> Vec<(NineSlice, usize)> {
    let mut index: HashMap<NineSlice, usize> = HashMap::new();
    let mut out: Vec<(NineSlice, usize)> = Vec::new();
    for &s in slices {
        match index.get(&s) {
            Some(&i) => out[i].1 += 1,
            None => {
                index.insert(s, out.len());
                out.push((s, 1));
            }
        }
    }
    out
}

fn load_slices_csv(path: &Path, has_headers: bool, delimiter: char) -> Result<Vec<NineSlice>> {
    if !delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    let rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_slices(rdr, has_headers)
}

/// Decode every record of `rdr` into a slice; undecodable rows are skipped with a warning.
fn read_slices<R: io::Read>(mut rdr: csv::Reader<R>, has_headers: bool) -> Result<Vec<NineSlice>> {
    let cols = if has_headers {
        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();
        log::debug!("Headers: {:?}", headers);
        resolve_columns(&headers)?
    } else {
        [0, 1, 2, 3]
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        match decode_row(&rec, cols) {
            Some(s) => out.push(s),
            None => log::warn!("skipping row {}: expected four integers, got {:?}", row + 1, rec),
        }
    }
    Ok(out)
}

/// Column indices in declaration order (tlx, tly, brx, bry).
fn resolve_columns(headers: &[String]) -> Result<[usize; 4]> {
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let find = |label: &str, names: &[&str]| -> Result<usize> {
        idx(names).with_context(|| format!("missing {label} column (expected one of {names:?})"))
    };
    Ok([
        find("top-left X", &["top_left_x", "tlx", "left"])?,
        find("top-left Y", &["top_left_y", "tly", "top"])?,
        find("bottom-right X", &["bottom_right_x", "brx", "right"])?,
        find("bottom-right Y", &["bottom_right_y", "bry", "bottom"])?,
    ])
}

fn decode_row(rec: &csv::StringRecord, cols: [usize; 4]) -> Option<NineSlice> {
    let cell = |i: usize| -> Option<i32> { rec.get(i).and_then(|s| s.trim().parse::<i32>().ok()) };
    Some(NineSlice::new(cell(cols[0])?, cell(cols[1])?, cell(cols[2])?, cell(cols[3])?))
}
