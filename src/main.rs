use anyhow::Result;
use clap::Parser;
use nqueens_bench::{sweep, BenchmarkRecord, Board, BoardSize, TimingRow};
use std::{fs, path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(name = "nqueens-bench")]
#[command(about = "Compare recursive and iterative N-Queens backtracking", long_about = None)]
struct Cli {
    /// Largest board size to benchmark, every size from 4 up to it is timed
    #[arg(value_name = "N", default_value_t = 8)]
    n: usize,

    /// Write the timing series as csv
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the board for N as csv rows of 0 and 1
    #[arg(short, long, value_name = "FILE")]
    board_output: Option<PathBuf>,

    /// Don't draw the board
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(why) = run(&cli) {
        println!("error: {why:?}");
        process::exit(1)
    }
}
fn run(cli: &Cli) -> Result<()> {
    let max = BoardSize::build(cli.n)?;
    let records = sweep(max);
    // sweep always ends with the selected size
    let Some(selected) = records.last() else {
        anyhow::bail!("no board sizes were benchmarked");
    };
    print_selected(selected, cli.quiet);
    print_series(&records);

    if let Some(path) = &cli.output {
        write_series(path, &records)?;
    }
    if let Some(path) = &cli.board_output {
        match &selected.board {
            Some(board) => write_board(path, board)?,
            None => log::warn!("no board to write to {}", path.display()),
        }
    }
    Ok(())
}
fn print_selected(record: &BenchmarkRecord, quiet: bool) {
    println!("n = {}", record.size.get());
    println!("recursive: {:.6} s", record.recursive_secs());
    println!("iterative: {:.6} s", record.iterative_secs());
    match &record.board {
        Some(_) if quiet => {}
        Some(board) => print!("\n{board}"),
        None => println!("no solution found"),
    }
}
fn print_series(records: &[BenchmarkRecord]) {
    println!("\n{:>3} {:>12} {:>12}", "n", "recursive", "iterative");
    for record in records {
        println!(
            "{:>3} {:>12.6} {:>12.6}",
            record.size.get(),
            record.recursive_secs(),
            record.iterative_secs()
        );
    }
}
fn create(path: &PathBuf) -> Result<fs::File> {
    Ok(fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?)
}
fn write_series(path: &PathBuf, records: &[BenchmarkRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(create(path)?);
    for record in records {
        writer.serialize(TimingRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
fn write_board(path: &PathBuf, board: &Board) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(create(path)?);
    for line in board.to_rows() {
        writer.serialize(line)?;
    }
    writer.flush()?;
    Ok(())
}
