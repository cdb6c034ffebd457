//! Nim scenarios: 1-3 take, last chip wins.

use rust_uct::core::{GameState, PlayerId};
use rust_uct::games::NimState;
use rust_uct::mcts::{UctConfig, UctSearch};

#[test]
fn test_one_chip_left() {
    let mut state = NimState::new(1);
    assert_eq!(state.moves(), vec![1]);

    state.do_move(&1);
    let mover = state.player_just_moved();

    assert!(state.moves().is_empty());
    assert_eq!(state.result(mover), 1.0);
    assert_eq!(state.result(mover.opponent()), 0.0);
}

#[test]
fn test_first_player_to_move_from_fresh_heap() {
    let state = NimState::new(15);
    assert_eq!(state.player_just_moved(), PlayerId::SECOND);
}

#[test]
fn test_losing_position_has_no_good_move() {
    // With 4 chips every move leaves the opponent a winning reply.
    let state = NimState::new(4);
    let mut search = UctSearch::new(UctConfig::default());
    let tree = search.search_tree(&state, 10_000);

    let children = tree.root_children();
    assert_eq!(children.len(), 3);
    for (take, visits, win_rate) in &children {
        assert!(*visits > 0);
        assert!(
            *win_rate < 0.5,
            "taking {} from 4 should look losing, got win rate {}",
            take,
            win_rate
        );
    }
}

#[test]
fn test_winning_positions_leave_multiple_of_four() {
    for chips in [5u32, 6, 7, 9, 10, 11] {
        let state = NimState::new(chips);
        let mut search = UctSearch::new(UctConfig::default().with_seed(u64::from(chips)));

        let take = search.search(&state, 5_000).expect("non-terminal root");

        assert_eq!(
            (chips - u32::from(take)) % 4,
            0,
            "from {} chips UCT took {}",
            chips,
            take
        );
    }
}

#[test]
fn test_fifteen_chips() {
    let state = NimState::new(15);
    let mut search = UctSearch::new(UctConfig::default());

    assert_eq!(search.search(&state, 10_000), Some(3));
}

#[test]
fn test_immediate_win_is_taken() {
    for chips in 1..=3u32 {
        let state = NimState::new(chips);
        let mut search = UctSearch::new(UctConfig::default());

        assert_eq!(search.search(&state, 200), Some(chips as u8));
    }
}

#[test]
fn test_clone_does_not_alias() {
    let original = NimState::new(11);
    let mut copy = original.clone();

    copy.do_move(&3);
    copy.do_move(&2);

    assert_eq!(original.chips(), 11);
    assert_eq!(original.moves(), vec![1, 2, 3]);
    assert_eq!(original.player_just_moved(), PlayerId::SECOND);
    assert_eq!(copy.chips(), 6);
}

#[test]
fn test_self_play_first_player_wins_from_fifteen() {
    // Both sides search; the side to move at 15 chips has a forced win.
    let mut state = NimState::new(15);
    let mut searches = [
        UctSearch::new(UctConfig::default().with_seed(1)),
        UctSearch::new(UctConfig::default().with_seed(2)),
    ];

    while !state.is_terminal() {
        let to_move = state.player_just_moved().opponent();
        let mv = searches[to_move.index()]
            .search(&state, 10_000)
            .expect("running game has moves");
        state.do_move(&mv);
    }

    assert_eq!(state.result(PlayerId::FIRST), 1.0);
}
