use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
#[macro_use]
extern crate text_io;

use boggle::utils::serialization;
use boggle::{Board, SolveError, Solver, SolverConfig};

/// Finds every word hidden in a square letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long, default_value = "vocabulary-english.txt")]
    vocabulary: PathBuf,

    /// Board as JSON, eg {"board": [["t","i"],["e","s"]]}. Read from stdin when omitted
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Use the word list as is instead of lowercasing it
    #[arg(long)]
    keep_case: bool,

    /// Give up on the board after this many milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (also BOGGLE_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            vocabulary_path: self.vocabulary.clone(),
            lowercase: !self.keep_case,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug_enabled = cli.debug || std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::logging::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: &Cli) -> Result<(), SolveError> {
    let t_load = Instant::now();
    let solver = Solver::from_config(&cli.solver_config())?;
    log::info!(
        "Loaded {} words from {} in {:.3}s",
        solver.vocabulary().len(),
        cli.vocabulary.display(),
        t_load.elapsed().as_secs_f64()
    );

    let board = match &cli.board {
        Some(path) => Board::from_file(path)?,
        None => Board::new(&read_rows()?)?,
    };

    let t_solve = Instant::now();
    let solution = solver.solve(&board)?;
    log::info!(
        "Solved {}x{} board in {:.3}s",
        board.size(),
        board.size(),
        t_solve.elapsed().as_secs_f64()
    );

    if cli.json {
        println!("{}", serialization::to_json(&solution.to_response(), true)?);
    } else {
        for word in solution.sorted_words() {
            println!("{}", word);
        }
        eprintln!("Score: {} ({} words)", solution.score(), solution.len());
    }
    Ok(())
}

/// Prompts for the board size and then each row. Rows are split on
/// whitespace ("qu i t e"); a row without spaces is one tile per letter.
fn read_rows() -> Result<Vec<Vec<String>>, SolveError> {
    eprintln!("Enter board size:");
    let size: usize = try_read!("{}\n").map_err(|e| SolveError::Input(e.to_string()))?;
    let mut rows = Vec::with_capacity(size);
    for i in 0..size {
        eprintln!("Enter row {}:", i + 1);
        let line: String = try_read!("{}\n").map_err(|e| SolveError::Input(e.to_string()))?;
        let line = line.trim();
        let row = if line.contains(char::is_whitespace) {
            line.split_whitespace().map(String::from).collect()
        } else {
            line.chars().map(String::from).collect()
        };
        rows.push(row);
    }
    Ok(rows)
}
