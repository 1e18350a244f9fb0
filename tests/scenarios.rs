use grid_astar::{
    parse_board, read_board_file, search, AstarSearch, Board, Cell, Node, ParseMode,
    SearchConfig, SearchObserver, SearchOutcome,
};

//  ______
// |S#    |
// | #    |
// | #    |
// | #    |
// |     G|
//  ______
fn wall_board() -> Board {
    let mut board = Board::new(6, 5);
    for row in 0..4 {
        board.set_obstacle(Board::point(row, 1), true);
    }
    board
}

#[derive(Default)]
struct GoalCost {
    goal: Option<grid_astar::Point>,
    cost: Option<u32>,
}

impl SearchObserver for GoalCost {
    fn on_expand(&mut self, node: &Node) {
        if Some(node.point) == self.goal && self.cost.is_none() {
            self.cost = Some(node.g);
        }
    }
}

#[test]
fn routes_around_vertical_wall() {
    let start = Board::point(0, 0);
    let goal = Board::point(4, 5);
    let solution = search(wall_board(), start, goal)
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(solution.cost, 9);
    // The only gap in the wall is on the bottom row
    assert!(solution.route.contains(&Board::point(4, 1)));
    assert_eq!(solution.board.get(Board::point(4, 1)), Some(Cell::Path));
    assert_eq!(solution.board.get(start), Some(Cell::Start));
    assert_eq!(solution.board.get(goal), Some(Cell::Finish));
    for row in 0..4 {
        assert_eq!(
            solution.board.get(Board::point(row, 1)),
            Some(Cell::Obstacle)
        );
    }
}

#[test]
fn closed_bottom_row_fails() {
    let mut board = wall_board();
    for col in 0..6 {
        board.set_obstacle(Board::point(4, col), true);
    }
    let outcome = search(board, Board::point(0, 0), Board::point(4, 5)).unwrap();
    assert!(matches!(outcome, SearchOutcome::Failed(_)));
}

#[test]
fn start_equals_goal() {
    let board = wall_board();
    let start = Board::point(2, 3);
    let mut observer = GoalCost {
        goal: Some(start),
        ..Default::default()
    };
    let outcome = AstarSearch::new(SearchConfig::default())
        .run_observed(board, start, start, &mut observer)
        .unwrap();
    let solution = outcome.into_solution().unwrap();
    assert_eq!(observer.cost, Some(0));
    assert_eq!(solution.cost, 0);
    assert_eq!(solution.stats.expanded, 1);
    assert_eq!(solution.stats.inserted, 1);
    assert_eq!(solution.board.count(Cell::is_explored), 1);
}

#[test]
fn single_row() {
    let board = Board::new(6, 1);
    let goal = Board::point(0, 5);
    let mut observer = GoalCost {
        goal: Some(goal),
        ..Default::default()
    };
    let solution = AstarSearch::new(SearchConfig::default())
        .run_observed(board, Board::point(0, 0), goal, &mut observer)
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(observer.cost, Some(5));
    assert_eq!(solution.cost, 5);
    assert_eq!(solution.board.count(|c| c != Cell::Empty), 6);
}

#[test]
fn walled_in_goal_fails() {
    //  _____
    // |S    |
    // |  #  |
    // | #G# |
    // |  #  |
    //  _____
    let mut board = Board::new(5, 4);
    for (row, col) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
        board.set_obstacle(Board::point(row, col), true);
    }
    let outcome = search(board, Board::point(0, 0), Board::point(2, 2)).unwrap();
    assert!(matches!(outcome, SearchOutcome::Failed(_)));
    // Every reachable cell was expanded before giving up
    assert_eq!(outcome.stats().expanded, 5 * 4 - 4 - 1);
}

#[test]
fn bundled_boards() {
    let board = read_board_file("boards/1.board", ParseMode::Strict).unwrap();
    let outcome = search(board, Board::point(0, 0), Board::point(4, 5)).unwrap();
    let solution = outcome.into_solution().unwrap();
    // The obstacle at (4, 4) forces a detour through row 3
    assert_eq!(solution.cost, 11);
    assert_eq!(solution.board.get(Board::point(4, 4)), Some(Cell::Obstacle));

    let board = read_board_file("boards/walled.board", ParseMode::Strict).unwrap();
    let outcome = search(board, Board::point(0, 0), Board::point(4, 5)).unwrap();
    assert!(!outcome.is_success());
}

const DETOUR: &str = "0,0,1,0,1,0,0,0
0,0,1,0,0,1,0,1
0,0,0,1,0,1,0,0
0,1,1,1,1,0,0,0
0,0,0,0,1,0,0,0
1,1,0,1,1,0,0,0
0,1,1,0,0,0,0,0
0,0,1,0,0,0,0,1
";

#[test]
fn first_discovery_cost_can_miss_shortest_path() {
    let board = parse_board(DETOUR, ParseMode::Strict).unwrap();
    let start = Board::point(5, 6);
    let goal = Board::point(0, 7);

    let legacy = AstarSearch::new(SearchConfig {
        update_open: false,
        ..Default::default()
    })
    .run(board.clone(), start, goal)
    .unwrap()
    .into_solution()
    .unwrap();
    assert_eq!(legacy.cost, 8);
    assert_eq!(legacy.stats.updated, 0);

    let solution = search(board, start, goal)
        .unwrap()
        .into_solution()
        .unwrap();
    assert_eq!(solution.cost, 6);
    assert!(solution.stats.updated > 0);
    assert_eq!(solution.route.len(), 7);
}
