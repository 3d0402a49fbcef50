use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve, SearchStats, Strategy};
use eight_puzzle_solver::utils::scrambled_board;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of scrambled boards to solve
    #[clap(short, long, default_value_t = 20)]
    boards: u32,

    /// Random slides applied to the goal per scramble
    #[clap(long, default_value_t = 12)]
    scramble_moves: u32,

    /// Seed of the first scramble; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

#[derive(Default)]
struct Totals {
    expanded: u64,
    generated: u64,
    length: u64,
    runtime_ms: f64,
}

impl Totals {
    fn accumulate(&mut self, stats: &SearchStats) {
        self.expanded += stats.nodes_expanded as u64;
        self.generated += stats.nodes_generated as u64;
        self.length += stats.solution_length as u64;
        self.runtime_ms += stats.runtime.as_secs_f64() * 1000.0;
    }

    fn print_averages(&self, label: &str, boards: u32) {
        let n = boards as f64;
        println!(
            "{:<5} avg: {:>9.1} expanded, {:>9.1} generated, {:>5.2} moves, {:>8.3} ms",
            label,
            self.expanded as f64 / n,
            self.generated as f64 / n,
            self.length as f64 / n,
            self.runtime_ms / n
        );
    }
}

fn main() {
    let args = Args::parse();
    let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);

    println!(
        "Comparing BFS and A* on {} boards scrambled with {} moves (seeds {}..{})\n",
        args.boards,
        args.scramble_moves,
        args.seed,
        args.seed + args.boards as u64
    );

    let mut bfs_totals = Totals::default();
    let mut astar_totals = Totals::default();

    for i in 0..args.boards {
        let seed = args.seed + i as u64;
        let initial = scrambled_board(&goal, args.scramble_moves, seed);

        let bfs = solve(&initial, &goal, Strategy::BreadthFirst);
        let astar = solve(&initial, &goal, Strategy::AStar);

        // Scrambles are reachable by construction.
        let bfs_stats = bfs.stats;
        let astar_stats = astar.stats;
        if bfs.solution.is_none() || astar.solution.is_none() {
            eprintln!("Board {} (seed {}) unexpectedly failed to solve", i, seed);
            continue;
        }

        println!(
            "Board {:>3} (seed {:>4}): BFS {:>6} expanded / {:>2} moves, A* {:>5} expanded / {:>2} moves",
            i,
            seed,
            bfs_stats.nodes_expanded,
            bfs_stats.solution_length,
            astar_stats.nodes_expanded,
            astar_stats.solution_length
        );

        bfs_totals.accumulate(&bfs_stats);
        astar_totals.accumulate(&astar_stats);
    }

    println!("\n--- Averages over {} boards ---", args.boards);
    bfs_totals.print_averages("BFS", args.boards);
    astar_totals.print_averages("A*", args.boards);
}
