#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_field::{init_logging, Board, Coord, FireOutcome, FLEET};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use serde_json::json;

/// Fire at the reference fleet and print the resulting field.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Shots to fire in order, each as ROW,COL (e.g. 9,9).
    #[arg(value_parser = parse_coord)]
    shots: Vec<Coord>,
    /// Print a single JSON report instead of text.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Result<Coord, String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got `{}`", input))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row `{}`: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{}`: {}", col, e))?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut board = Board::new(&FLEET)?;
    let results: Vec<(Coord, FireOutcome)> = cli
        .shots
        .iter()
        .map(|&shot| (shot, board.fire(shot)))
        .collect();

    if board.all_sunk() {
        log::info!("every ship has been sunk");
    }

    if cli.json {
        let shots: Vec<_> = results
            .iter()
            .map(|((row, col), outcome)| json!({"row": row, "col": col, "outcome": outcome}))
            .collect();
        let rendered = board.render();
        let field: Vec<&str> = rendered.lines().collect();
        let report = json!({
            "shots": shots,
            "field": field,
            "all_sunk": board.all_sunk(),
        });
        println!("{}", serde_json::to_string(&report)?);
    } else {
        for ((row, col), outcome) in &results {
            println!("{},{}: {}", row, col, outcome);
        }
        board.print_field();
    }
    Ok(())
}
