//! Command-line interface for natsort
//! Sorts lines, or rows of a delimited table, in natural order.
//!
//! Usage:
//!   natsort [PATH] [--type `<type>`] [--reverse] [--column `<n>` --delimiter `<d>`]
//!   natsort --compare `<a>` `<b>`          - Print -1, 0 or 1
//!   natsort --tokens [PATH]              - Show how each line is tokenized
//!   natsort --list-types                 - List registered sort types
mod logging;
mod table;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use natsort::natural::{sign, NaturalKey, SortType, SortTypeRegistry, Token, Value};
use natsort_config::{Loader, NatsortConfig};
use serde::Serialize;
use std::io::Read;
use table::{Table, TableLayout};
use tracing::debug;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn command() -> Command {
    Command::new("natsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort lines or table rows in natural order")
        .arg(
            Arg::new("path")
                .help("Input file (reads stdin when absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .help("Base sort type (e.g. 'natural'); the direction is added from --reverse"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .help("Sort in descending order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .short('k')
                .help("1-based column to sort by (0 = whole line)")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .short('t')
                .help("Column delimiter (empty = runs of whitespace)"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .help("Keep the first line in place")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-dates")
                .long("no-dates")
                .help("Do not order date-like values chronologically")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print each line's tokenization as JSON instead of sorting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Compare two values and print -1, 0 or 1")
                .num_args(2)
                .value_names(["A", "B"])
                .conflicts_with_all(["path", "tokens"]),
        )
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List available sort types")
                .action(ArgAction::SetTrue),
        )
}

fn run() -> Result<()> {
    let matches = command().get_matches();
    let config = load_config(&matches)?;
    logging::init(&config.logging.level)?;

    let registry = SortTypeRegistry::with_options(config.sorting.options());
    if matches.get_flag("list-types") {
        handle_list_types_command(&registry);
        return Ok(());
    }

    let sort_type = registry.lookup(&config.sorting.sort_type, config.sorting.direction())?;
    debug!(sort_type = sort_type.name(), "resolved sort type");

    if let Some(values) = matches.get_many::<String>("compare") {
        let values: Vec<&String> = values.collect();
        handle_compare_command(sort_type, values[0], values[1]);
        return Ok(());
    }

    let source = read_input(matches.get_one::<String>("path"))?;
    let layout = TableLayout::from_config(&config.table);

    if matches.get_flag("tokens") {
        return handle_tokens_command(&source, &layout, &config);
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    handle_sort_command(&source, &layout, sort_type, format)
}

/// Defaults, then the optional config file, then command-line flags.
fn load_config(matches: &ArgMatches) -> Result<NatsortConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(sort_type) = matches.get_one::<String>("type") {
        loader = loader.set_override("sorting.sort_type", sort_type.as_str())?;
    }
    if matches.get_flag("reverse") {
        loader = loader.set_override("sorting.descending", true)?;
    }
    if matches.get_flag("no-dates") {
        loader = loader.set_override("sorting.dates", false)?;
    }
    if let Some(column) = matches.get_one::<usize>("column") {
        let column = i64::try_from(*column).context("column out of range")?;
        loader = loader.set_override("table.column", column)?;
    }
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        loader = loader.set_override("table.delimiter", delimiter.as_str())?;
    }
    if matches.get_flag("header") {
        loader = loader.set_override("table.header", true)?;
    }
    loader.build().context("invalid configuration")
}

fn read_input(path: Option<&String>) -> Result<String> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
    }
}

/// Handle the default sort command
fn handle_sort_command(
    source: &str,
    layout: &TableLayout,
    sort_type: &dyn SortType,
    format: &str,
) -> Result<()> {
    let mut table = Table::parse(source, layout);
    debug!(rows = table.rows().len(), "sorting rows");
    table.sort(layout, sort_type);

    let lines = table.lines();
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&lines)?),
        _ => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn handle_compare_command(sort_type: &dyn SortType, a: &str, b: &str) {
    let ordering = sort_type.compare(&Value::from(a), &Value::from(b));
    println!("{}", sign(ordering));
}

#[derive(Serialize)]
struct Breakdown<'a> {
    input: &'a str,
    normalized: &'a str,
    timestamp: Option<i64>,
    tokens: Vec<Token<'a>>,
}

/// Handle the tokens command: one breakdown per data row
fn handle_tokens_command(source: &str, layout: &TableLayout, config: &NatsortConfig) -> Result<()> {
    let table = Table::parse(source, layout);
    let options = config.sorting.options();
    let cells: Vec<&str> = table
        .rows()
        .iter()
        .map(|row| layout.cell(row).unwrap_or(""))
        .collect();
    let keys: Vec<NaturalKey> = cells
        .iter()
        .map(|cell| NaturalKey::with_options(*cell, options))
        .collect();
    let breakdowns: Vec<Breakdown> = cells
        .iter()
        .zip(&keys)
        .map(|(cell, key)| Breakdown {
            input: cell,
            normalized: key.text(),
            timestamp: key.timestamp(),
            tokens: key.tokens(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&breakdowns)?);
    Ok(())
}

/// Handle the list-types command
fn handle_list_types_command(registry: &SortTypeRegistry) {
    println!("Available sort types:\n");
    for name in registry.list_types() {
        println!("  {name}");
        if let Some(sort_type) = registry.get(&name) {
            println!("    {}", sort_type.description());
        }
        println!();
    }
}
