use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use grid_astar::{
    read_board_file, render, AstarSearch, Board, Glyphs, Heuristic, ParseMode, PathMarking,
    Point, SearchConfig, SearchError, SearchOutcome, SortedFrontier,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrontierKind {
    /// Binary heap
    Heap,
    /// Full sort before every pop
    Sorted,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicKind {
    Manhattan,
    Zero,
}

/// Finds a path across a board file and prints the annotated board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file: one row per line, comma-separated, 0 for empty and anything else for an obstacle
    board: PathBuf,

    /// Start cell as ROW,COL
    #[arg(short, long, value_parser = parse_coord, default_value = "0,0")]
    start: Point,

    /// Goal cell as ROW,COL
    #[arg(short, long, value_parser = parse_coord)]
    goal: Point,

    /// Reject malformed rows instead of truncating them
    #[arg(long)]
    strict: bool,

    /// Only mark the reconstructed route instead of every expanded cell
    #[arg(long)]
    route: bool,

    /// Plain ASCII output
    #[arg(long)]
    ascii: bool,

    #[arg(long, value_enum, default_value_t = FrontierKind::Heap)]
    frontier: FrontierKind,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Check connected components before searching
    #[arg(long)]
    check_reachability: bool,

    /// Keep the cost a cell was first discovered with, even if a cheaper route turns up
    #[arg(long)]
    first_discovery: bool,
}

fn parse_coord(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Board::try_point(row, col).ok_or_else(|| format!("coordinate {s:?} is too large"))
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let board = read_board_file(&args.board, mode)
        .with_context(|| format!("loading {}", args.board.display()))?;
    info!(
        "Loaded {}x{} board from {}",
        board.width(),
        board.height(),
        args.board.display()
    );

    let config = SearchConfig {
        heuristic: match args.heuristic {
            HeuristicKind::Manhattan => Heuristic::Manhattan,
            HeuristicKind::Zero => Heuristic::Zero,
        },
        marking: if args.route {
            PathMarking::Route
        } else {
            PathMarking::Expanded
        },
        update_open: !args.first_discovery,
        check_reachability: args.check_reachability,
        ..Default::default()
    };
    let outcome: Result<SearchOutcome, SearchError> = match args.frontier {
        FrontierKind::Heap => AstarSearch::new(config).run(board, args.start, args.goal),
        FrontierKind::Sorted => AstarSearch::with_frontier(config, SortedFrontier::new())
            .run(board, args.start, args.goal),
    };

    let glyphs = if args.ascii {
        Glyphs::ASCII
    } else {
        Glyphs::EMOJI
    };
    match outcome? {
        SearchOutcome::Succeeded(solution) => {
            info!(
                "Path cost {} ({} expanded, {} inserted, {} updated, frontier peak {})",
                solution.cost,
                solution.stats.expanded,
                solution.stats.inserted,
                solution.stats.updated,
                solution.stats.max_frontier
            );
            print!("{}", render(&solution.board, &glyphs));
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::Failed(_) | SearchOutcome::Cancelled(_) => {
            println!("No path found!");
            Ok(ExitCode::FAILURE)
        }
    }
}
