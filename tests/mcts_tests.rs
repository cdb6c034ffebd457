//! UCT integration tests using the reference games.

use rust_uct::core::{GameRng, GameState, PlayerId, UctError};
use rust_uct::games::{NimState, OxoState};
use rust_uct::mcts::{UctConfig, UctSearch, UctTree};

// =============================================================================
// Helpers
// =============================================================================

/// (move, depth, visits, wins) for every node, in allocation order.
fn snapshot<M: Clone + PartialEq>(tree: &UctTree<M>) -> Vec<(Option<M>, u32, u32, f64)> {
    tree.iter()
        .map(|(_, n)| (n.mv.clone(), n.depth, n.visits, n.wins))
        .collect()
}

fn oxo(board: &str) -> OxoState {
    board.parse().expect("valid board")
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_search_returns_move() {
    let state = NimState::new(15);
    let mut search = UctSearch::new(UctConfig::default());

    let mv = search.search(&state, 100);

    assert!(mv.is_some(), "UCT should return a move");
}

#[test]
fn test_search_with_one_iteration() {
    let state = OxoState::new();
    let mut search = UctSearch::new(UctConfig::default());

    let mv = search.search(&state, 1);

    assert!(mv.is_some());
    assert!(state.moves().contains(&mv.unwrap()));
}

// =============================================================================
// Visit Accounting
// =============================================================================

#[test]
fn test_root_children_visits_sum_to_iterations() {
    for iterations in [1, 7, 64, 500] {
        let mut search = UctSearch::new(UctConfig::default());
        let tree = search.search_tree(&OxoState::new(), iterations);

        assert_eq!(tree.root_node().visits, iterations);
        assert_eq!(
            tree.child_visits(tree.root()),
            iterations,
            "root children should absorb every iteration"
        );
    }
}

#[test]
fn test_visits_cover_children() {
    let mut search = UctSearch::new(UctConfig::default());
    let tree = search.search_tree(&OxoState::new(), 2000);

    for (id, node) in tree.iter() {
        let children = tree.child_visits(id);
        assert!(
            node.visits >= children,
            "{} has {} visits but its children have {}",
            id,
            node.visits,
            children
        );
        // An expanded node is visited once when created, then once per
        // iteration that passes through one of its children.
        if !node.children.is_empty() && !node.is_root() {
            assert_eq!(node.visits, children + 1);
        }
        assert!(node.wins >= 0.0 && node.wins <= node.visits as f64);
    }
}

#[test]
fn test_partition_of_moves() {
    let mut search = UctSearch::new(UctConfig::default());
    let tree = search.search_tree(&NimState::new(10), 40);

    for (_, node) in tree.iter() {
        let expanded: Vec<u8> = node
            .children
            .iter()
            .filter_map(|&c| tree.get(c).mv)
            .collect();
        for mv in &expanded {
            assert!(!node.untried_moves.contains(mv), "move {} both tried and untried", mv);
        }
    }
}

// =============================================================================
// Viewpoint Tests
// =============================================================================

#[test]
fn test_parent_and_child_results_are_complementary() {
    let mut state = NimState::new(7);
    let mut rng = GameRng::new(3);
    while !state.is_terminal() {
        let moves = state.moves();
        state.do_move(rng.choose(&moves).unwrap());
    }

    for p in PlayerId::both() {
        assert_eq!(state.result(p), 1.0 - state.result(p.opponent()));
    }

    let draw = oxo("XOX XOO OXX");
    assert_eq!(draw.result(PlayerId::FIRST), 1.0 - draw.result(PlayerId::SECOND));
}

#[test]
fn test_nodes_alternate_players() {
    let mut search = UctSearch::new(UctConfig::default());
    let tree = search.search_tree(&NimState::new(9), 300);

    for (_, node) in tree.iter() {
        for &child in &node.children {
            assert_eq!(tree.get(child).player_just_moved, node.player_just_moved.opponent());
        }
    }
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_deterministic_with_seed() {
    let state = OxoState::new();
    let config = UctConfig::default().with_seed(12345);

    let mut search1 = UctSearch::new(config.clone());
    let mut search2 = UctSearch::new(config);

    let tree1 = search1.search_tree(&state, 500);
    let tree2 = search2.search_tree(&state, 500);

    assert_eq!(tree1.best_move(), tree2.best_move());
    assert_eq!(snapshot(&tree1), snapshot(&tree2));
}

#[test]
fn test_different_seeds_complete() {
    let state = NimState::new(15);

    let mut search1 = UctSearch::new(UctConfig::default().with_seed(111));
    let mut search2 = UctSearch::new(UctConfig::default().with_seed(222));

    search1.search(&state, 500);
    search2.search(&state, 500);

    assert_eq!(search1.stats().iterations, 500);
    assert_eq!(search2.stats().iterations, 500);
}

// =============================================================================
// Play Strength
// =============================================================================

#[test]
fn test_oxo_takes_immediate_win() {
    let state = oxo("XX. OO. ...");
    let mut search = UctSearch::new(UctConfig::default());

    assert_eq!(search.search(&state, 1000), Some(2));
}

#[test]
fn test_oxo_blocks_threat() {
    // X to move; O threatens to complete the top row.
    let state = oxo("OO. X.. X..");
    let mut search = UctSearch::new(UctConfig::default());

    assert_eq!(search.search(&state, 2000), Some(2));
}

#[test]
fn test_oxo_completes_bottom_row() {
    let state = oxo(".O. .O. X.X");
    let mut search = UctSearch::new(UctConfig::default().with_seed(9));

    assert_eq!(search.search(&state, 2000), Some(7));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_exploration_constant_changes_tree() {
    let state = OxoState::new();

    let mut explore = UctSearch::new(UctConfig::default().with_exploration(5.0));
    let mut exploit = UctSearch::new(UctConfig::default().with_exploration(0.1));

    let wide = explore.search_tree(&state, 400);
    let narrow = exploit.search_tree(&state, 400);

    let max_wide = wide.root_children().iter().map(|c| c.1).max().unwrap();
    let max_narrow = narrow.root_children().iter().map(|c| c.1).max().unwrap();

    // Heavier exploration spreads visits more evenly over the root children.
    assert!(max_wide < max_narrow);
}

#[test]
fn test_config_serialization() {
    let config = UctConfig::default().with_exploration(2.0).with_seed(999);

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: UctConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config.seed, deserialized.seed);
    assert_eq!(config.exploration_constant, deserialized.exploration_constant);
}

#[test]
fn test_verbose_search_still_returns() {
    let state = NimState::new(8);
    let mut search = UctSearch::new(UctConfig::default().with_verbose(true));

    assert!(search.search(&state, 50).is_some());
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_terminal_root() {
    let state = oxo("XXX OO. ...");
    let mut search = UctSearch::new(UctConfig::default());

    assert_eq!(search.search(&state, 10), None);
    assert_eq!(search.try_search(&state, 10), Err(UctError::TerminalRoot));
}

#[test]
fn test_single_legal_move() {
    let state = oxo("XOX XOO OX.");
    let mut search = UctSearch::new(UctConfig::default());

    assert_eq!(search.search(&state, 10), Some(8));
}

#[test]
fn test_stats_recorded() {
    let mut search = UctSearch::new(UctConfig::default());
    let tree = search.search_tree(&OxoState::new(), 200);

    let stats = search.stats();
    assert_eq!(stats.iterations, 200);
    assert_eq!(stats.simulations, 200);
    assert_eq!(stats.nodes_expanded as usize, tree.len() - 1);
    assert_eq!(stats.max_depth, tree.stats().max_depth);
    assert!(stats.avg_rollout_length() > 0.0);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_independent_searches_on_threads() {
    let state = NimState::new(13);
    let mut rng = GameRng::new(5);
    let first = rng.fork();
    let second = rng.fork();

    let (a, b) = std::thread::scope(|s| {
        let ha = s.spawn(|| {
            UctSearch::new(UctConfig::default())
                .with_rng(first)
                .search(&state, 3000)
        });
        let hb = s.spawn(|| {
            UctSearch::new(UctConfig::default())
                .with_rng(second)
                .search(&state, 3000)
        });
        (ha.join().unwrap(), hb.join().unwrap())
    });

    // 13 = 4 * 3 + 1: take one.
    assert_eq!(a, Some(1));
    assert_eq!(b, Some(1));
    assert_eq!(state.chips(), 13);
}
