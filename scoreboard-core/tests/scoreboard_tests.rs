//! Façade behaviour: validation order, score updates, finishing, ranking.

use rstest::rstest;
use scoreboard_core::{Scoreboard, ScoreboardError, Side, TeamName};

fn board_with(pairs: &[(&str, &str)]) -> Scoreboard {
    let board = Scoreboard::new();
    for (home, away) in pairs {
        board.start_match(home, away).expect("start");
    }
    board
}

fn pairs(board: &Scoreboard) -> Vec<(String, String)> {
    board
        .summary()
        .iter()
        .map(|s| (s.home().to_string(), s.away().to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Starting matches
// ---------------------------------------------------------------------------

#[test]
fn started_match_appears_once_at_zero_zero() {
    let board = board_with(&[("Mexico", "Canada")]);
    let summary = board.summary();
    assert_eq!(summary.len(), 1);
    let only = &summary[0];
    assert_eq!(only.home(), &TeamName::from("Mexico"));
    assert_eq!(only.away(), &TeamName::from("Canada"));
    assert_eq!((only.home_score(), only.away_score()), (0, 0));
}

#[rstest]
#[case("", "Canada", ScoreboardError::EmptyIdentifier { side: Side::Home })]
#[case("   ", "Canada", ScoreboardError::EmptyIdentifier { side: Side::Home })]
#[case("Mexico", "", ScoreboardError::EmptyIdentifier { side: Side::Away })]
#[case("Mexico", "\t ", ScoreboardError::EmptyIdentifier { side: Side::Away })]
#[case("", "", ScoreboardError::EmptyIdentifier { side: Side::Home })]
#[case("Mexico", "Mexico", ScoreboardError::IdenticalSides { team: TeamName::from("Mexico") })]
#[case(" Mexico", "Mexico ", ScoreboardError::IdenticalSides { team: TeamName::from("Mexico") })]
fn invalid_names_are_rejected(
    #[case] home: &str,
    #[case] away: &str,
    #[case] expected: ScoreboardError,
) {
    let board = Scoreboard::new();
    let err = board.start_match(home, away).unwrap_err();
    assert_eq!(err, expected);
    assert!(board.is_empty());
}

#[rstest]
#[case("Canada", "Mexico")]
#[case("Mexico", "Canada")]
#[case("Mexico", "Spain")]
#[case("Spain", "Mexico")]
#[case("Canada", "Spain")]
#[case("Spain", "Canada")]
fn busy_team_cannot_start_again(#[case] home: &str, #[case] away: &str) {
    let board = board_with(&[("Mexico", "Canada")]);
    let err = board.start_match(home, away).unwrap_err();
    assert!(matches!(err, ScoreboardError::ParticipantBusy { .. }), "got: {err}");
    assert_eq!(board.len(), 1);
}

#[test]
fn busy_error_names_home_first() {
    let board = board_with(&[("Mexico", "Canada"), ("Spain", "Brazil")]);
    let err = board.start_match("Brazil", "Canada").unwrap_err();
    assert_eq!(err, ScoreboardError::ParticipantBusy { team: TeamName::from("Brazil") });
}

#[test]
fn team_can_play_again_after_finishing() {
    let board = board_with(&[("Mexico", "Canada")]);
    board.finish_match("Mexico", "Canada");
    board.start_match("Canada", "Spain").expect("Canada is free again");
    assert!(board.is_playing("Canada"));
    assert!(!board.is_playing("Mexico"));
}

// ---------------------------------------------------------------------------
// 2. Score updates
// ---------------------------------------------------------------------------

#[test]
fn last_update_wins() {
    let board = board_with(&[("Mexico", "Canada")]);
    board.update_score("Mexico", "Canada", 0, 1).expect("first");
    board.update_score("Mexico", "Canada", 0, 5).expect("second");
    let summary = board.summary();
    assert_eq!((summary[0].home_score(), summary[0].away_score()), (0, 5));
    assert_eq!(summary[0].home(), &TeamName::from("Mexico"));
}

#[test]
fn update_with_swapped_order_reaches_same_match() {
    let board = board_with(&[("Mexico", "Canada")]);
    let updated = board.update_score("Canada", "Mexico", 5, 0).expect("update");
    assert_eq!(updated.home(), &TeamName::from("Mexico"));
    assert_eq!((updated.home_score(), updated.away_score()), (5, 0));
    let summary = board.summary();
    assert_eq!(summary[0].home(), &TeamName::from("Mexico"));
    assert_eq!((summary[0].home_score(), summary[0].away_score()), (5, 0));
}

#[test]
fn update_of_unknown_match_is_not_found() {
    let board = board_with(&[("Mexico", "Canada")]);
    let err = board.update_score("Spain", "Brazil", 1, 0).unwrap_err();
    assert!(matches!(err, ScoreboardError::NotFound { .. }), "got: {err}");
}

#[test]
fn update_across_two_matches_is_not_found() {
    let board = board_with(&[("Mexico", "Canada"), ("Spain", "Brazil")]);
    let err = board.update_score("Mexico", "Brazil", 1, 0).unwrap_err();
    assert!(matches!(err, ScoreboardError::NotFound { .. }), "got: {err}");
}

#[rstest]
#[case(-1, 0)]
#[case(0, -1)]
#[case(-3, -3)]
#[case(i32::MIN, 2)]
fn negative_scores_are_rejected(#[case] home: i32, #[case] away: i32) {
    let board = board_with(&[("Mexico", "Canada")]);
    let err = board.update_score("Mexico", "Canada", home, away).unwrap_err();
    assert_eq!(err, ScoreboardError::NegativeScore { home, away });
    assert_eq!(board.summary()[0].total_score(), 0);
}

#[test]
fn very_large_scores_are_accepted() {
    let board = board_with(&[("Mexico", "Canada")]);
    board.update_score("Mexico", "Canada", i32::MAX, i32::MAX).expect("no upper bound");
    assert_eq!(board.summary()[0].total_score(), 2 * i32::MAX as u64);
}

// ---------------------------------------------------------------------------
// 3. Finishing
// ---------------------------------------------------------------------------

#[test]
fn finishing_unknown_match_is_silent() {
    let board = board_with(&[("Mexico", "Canada")]);
    assert!(board.finish_match("Spain", "Brazil").is_none());
    assert!(board.finish_match("Spain", "Brazil").is_none());
    assert_eq!(pairs(&board), [("Mexico".to_string(), "Canada".to_string())]);
}

#[test]
fn finishing_twice_only_removes_once() {
    let board = board_with(&[("Mexico", "Canada"), ("Spain", "Brazil")]);
    assert!(board.finish_match("Mexico", "Canada").is_some());
    assert!(board.finish_match("Mexico", "Canada").is_none());
    assert_eq!(board.len(), 1);
}

// ---------------------------------------------------------------------------
// 4. Summary ordering
// ---------------------------------------------------------------------------

#[test]
fn ties_go_to_most_recent_start() {
    let board = board_with(&[("A", "a"), ("B", "b"), ("C", "c")]);
    board.update_score("A", "a", 3, 2).expect("A");
    board.update_score("B", "b", 1, 4).expect("B");
    board.update_score("C", "c", 2, 1).expect("C");
    let order: Vec<String> = board.summary().iter().map(|s| s.home().to_string()).collect();
    assert_eq!(order, ["B", "A", "C"]);
}

#[test]
fn world_cup_scenario() {
    let board = board_with(&[
        ("Mexico", "Canada"),
        ("Spain", "Brazil"),
        ("Germany", "France"),
        ("Uruguay", "Italy"),
        ("Argentina", "Australia"),
    ]);
    board.update_score("Mexico", "Canada", 0, 5).expect("update");
    board.update_score("Spain", "Brazil", 10, 2).expect("update");
    board.update_score("Germany", "France", 2, 2).expect("update");
    board.update_score("Uruguay", "Italy", 6, 6).expect("update");
    board.update_score("Argentina", "Australia", 3, 1).expect("update");

    let rendered: Vec<String> = board
        .summary()
        .iter()
        .map(|s| format!("{} {} - {} {}", s.home(), s.home_score(), s.away(), s.away_score()))
        .collect();
    assert_eq!(
        rendered,
        [
            "Uruguay 6 - Italy 6",
            "Spain 10 - Brazil 2",
            "Mexico 0 - Canada 5",
            "Argentina 3 - Australia 1",
            "Germany 2 - France 2",
        ]
    );
}

#[test]
fn summary_is_a_snapshot() {
    let board = board_with(&[("Mexico", "Canada")]);
    let before = board.summary();
    board.update_score("Mexico", "Canada", 1, 1).expect("update");
    board.start_match("Spain", "Brazil").expect("start");
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].total_score(), 0);
    assert_eq!(board.summary().len(), 2);
}

#[test]
fn recreated_match_counts_as_newer() {
    let board = board_with(&[("Mexico", "Canada"), ("Spain", "Brazil")]);
    board.finish_match("Mexico", "Canada");
    board.start_match("Mexico", "Canada").expect("restart");
    let order: Vec<String> = board.summary().iter().map(|s| s.home().to_string()).collect();
    assert_eq!(order, ["Mexico", "Spain"]);
}
