//! Spicevault command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use spicevault::{
    Extractor, ExtractorConfig, ModelFilter, ModelStore, ParameterRange, SubcircuitFilter,
};

#[derive(Parser)]
#[command(name = "spicevault")]
#[command(about = "Extract SPICE models and subcircuits into a queryable store", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the store database
    #[arg(long, global = true, default_value = "spicevault.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract netlist files into the store
    Extract {
        /// Netlist files to scan
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Append anomaly lines (skipped models, stray .ends, ...) here
        #[arg(long)]
        log: Option<PathBuf>,

        /// Empty the store before extracting
        #[arg(long)]
        clear: bool,
    },

    /// Query models by type, name pattern, and parameter range
    Models {
        /// Model type to match (nmos, pmos, diode, ...)
        #[arg(long = "type")]
        model_type: String,

        /// SQL LIKE pattern on the model name (% wildcard)
        #[arg(long)]
        name: Option<String>,

        /// Numeric range on a parameter, as NAME[:MIN][:MAX]; repeatable
        #[arg(long = "range", value_name = "NAME[:MIN][:MAX]")]
        ranges: Vec<String>,

        /// Maximum number of models returned
        #[arg(long, default_value_t = 50)]
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search subcircuit definitions by name pattern
    Subckts {
        /// SQL LIKE pattern on the subcircuit name (% wildcard)
        #[arg(long)]
        name: Option<String>,

        /// Maximum number of subcircuits returned
        #[arg(long, default_value_t = 50)]
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show model counts per type and the subcircuit count
    Stats,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { files, log, clear } => run_extract(&cli.db, &files, log, clear),
        Command::Models {
            model_type,
            name,
            ranges,
            limit,
            json,
        } => run_models(&cli.db, model_type, name, &ranges, limit, json),
        Command::Subckts { name, limit, json } => run_subckts(&cli.db, name, limit, json),
        Command::Stats => run_stats(&cli.db),
    }
}

fn open_store(db: &PathBuf) -> Result<ModelStore> {
    ModelStore::open(db).with_context(|| format!("opening store {}", db.display()))
}

fn run_extract(db: &PathBuf, files: &[PathBuf], log: Option<PathBuf>, clear: bool) -> Result<()> {
    let mut store = open_store(db)?;
    if clear {
        store.clear().context("clearing store")?;
    }

    let config = ExtractorConfig { log_path: log };
    let mut extractor = Extractor::new(store, &config)?;

    let mut total_models = 0;
    let mut total_subcircuits = 0;
    for file in files {
        let stats = extractor.extract_file(file)?;
        println!(
            "{}: {} models, {} subcircuits",
            file.display(),
            stats.models,
            stats.subcircuits
        );
        total_models += stats.models;
        total_subcircuits += stats.subcircuits;
    }

    if files.len() > 1 {
        println!("total: {total_models} models, {total_subcircuits} subcircuits");
    }
    Ok(())
}

fn run_models(
    db: &PathBuf,
    model_type: String,
    name: Option<String>,
    ranges: &[String],
    limit: usize,
    json: bool,
) -> Result<()> {
    let mut filter = ModelFilter::new(model_type).with_max_results(limit);
    filter.name_pattern = name;
    for raw in ranges {
        filter.ranges.push(parse_range(raw)?);
    }

    let store = open_store(db)?;
    let hits = store.query_models(&filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    for (name, m) in &hits {
        println!(
            "{name} ({}) at {}:{}",
            m.model_type, m.source_file, m.line_number
        );
        for (param, value) in &m.parameters {
            println!("    {param} = {value}");
        }
    }
    println!(
        "{} model{} found",
        hits.len(),
        if hits.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

fn run_subckts(db: &PathBuf, name: Option<String>, limit: usize, json: bool) -> Result<()> {
    let mut filter = SubcircuitFilter::new().with_max_results(limit);
    filter.name_pattern = name;

    let store = open_store(db)?;
    let hits = store.search_subcircuits(&filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    for (name, s) in &hits {
        println!("{name} at {}:{}", s.source_file, s.line_number);
        println!("{}", s.content);
        println!();
    }
    println!(
        "{} subcircuit{} found",
        hits.len(),
        if hits.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

fn run_stats(db: &PathBuf) -> Result<()> {
    let store = open_store(db)?;
    let stats = store.stats()?;

    for (model_type, count) in &stats.models_by_type {
        println!("{model_type}: {count}");
    }
    println!("subcircuits: {}", stats.subcircuit_count);
    Ok(())
}

/// Parse `NAME[:MIN][:MAX]` into a parameter range. Empty bounds are
/// open: `l:1e-7:` means at-least, `l::2e-7` means at-most.
fn parse_range(raw: &str) -> Result<ParameterRange> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        bail!("range '{raw}' is missing a parameter name");
    }

    let parse_bound = |part: Option<&str>| -> Result<Option<f64>> {
        match part {
            None | Some("") => Ok(None),
            Some(text) => {
                let v: f64 = text
                    .parse()
                    .with_context(|| format!("range '{raw}': bad bound '{text}'"))?;
                Ok(Some(v))
            }
        }
    };

    let min = parse_bound(parts.next())?;
    let max = parse_bound(parts.next())?;
    Ok(ParameterRange::new(name, min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_full() {
        let r = parse_range("l:1e-7:2e-7").unwrap();
        assert_eq!(r.name, "l");
        assert_eq!(r.min, Some(1e-7));
        assert_eq!(r.max, Some(2e-7));
    }

    #[test]
    fn test_parse_range_open_ends() {
        assert_eq!(parse_range("l:1e-7:").unwrap().max, None);
        assert_eq!(parse_range("l::2e-7").unwrap().min, None);
        let bare = parse_range("l").unwrap();
        assert_eq!((bare.min, bare.max), (None, None));
    }

    #[test]
    fn test_parse_range_rejects_garbage() {
        assert!(parse_range("").is_err());
        assert!(parse_range(":1:2").is_err());
        assert!(parse_range("l:abc").is_err());
    }
}
