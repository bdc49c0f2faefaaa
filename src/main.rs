mod node;
mod solver;
mod state;

use clap::Parser;
use node::SearchNode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use solver::{SolveResult, Solver};
use state::PuzzleState;
use std::rc::Rc;
use std::time::Instant;

fn print_solution(path: &[Rc<SearchNode>]) {
    println!("\nStarting position:\n{}", path[0].state());
    let total = path.len() - 1;
    for (count, node) in path.iter().skip(1).enumerate() {
        // Every non-root node records the tile that was moved
        let tile = node.moved().unwrap();
        println!("Move tile {} ({}/{}):\n{}", tile, count + 1, total, node.state());
    }
}

#[derive(Parser)]
#[command(name = "taquin")]
#[command(about = "An 8-puzzle solver", long_about = None)]
struct Args {
    /// Starting arrangement as 9 digits, row-major, '0' for the blank
    /// (e.g. 123406758); a random shuffle is used if omitted
    #[arg(value_name = "BOARD")]
    board: Option<String>,

    /// Seed for the random shuffle (random boards are reproducible per seed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the solution step-by-step
    #[arg(short, long)]
    print_solution: bool,
}

fn main() {
    let args = Args::parse();

    let state = match &args.board {
        Some(seq) => match PuzzleState::from_sequence(seq) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mut rng = match args.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            PuzzleState::random(&mut rng)
        }
    };

    println!("Board: {}\n{}", state.serialize(), state);

    let mut solver = Solver::new();
    let start = Instant::now();
    let result = solver.solve(SearchNode::root(state));
    let elapsed_ms = start.elapsed().as_millis();

    let (solved_char, steps, path) = match &result {
        SolveResult::Solved(path) => ('Y', path.len() - 1, Some(path)),
        SolveResult::Unsolvable => ('X', 0, None),
    };

    println!(
        "solved: {}  steps: {:<4}  states: {:<8}  elapsed: {} ms",
        solved_char,
        steps,
        solver.nodes_explored(),
        elapsed_ms
    );

    match path {
        Some(path) => {
            if args.print_solution {
                print_solution(path);
            }
        }
        None => {
            eprintln!("Board is unsolvable; no solution exists.");
            std::process::exit(1);
        }
    }
}
