use proptest::prelude::*;

use slstour::{
    athlete::Athlete,
    contest::Contest,
    core::tour::Tour,
    persist::text::{decode, encode},
    types::{DEFAULT_CAPACITY, Gender, Stance},
};

const LOCATIONS: [&str; 12] = [
    "Paris", "Rome", "Tokyo", "Sydney", "Lisbon", "Chicago", "Jacksonville", "Berlin",
    "Oslo", "Lima", "Cairo", "Seoul",
];
const NAMES: [&str; 12] = [
    "Huston", "Eaton", "Hoban", "Shirai", "Ribeiro", "Gustavo", "Foy", "Jordan", "Milou",
    "Decenzo", "Hayes", "Yuto",
];

#[derive(Debug, Clone)]
enum Action {
    AddContest { idx: u8 },
    AddAthlete { idx: u8, goofy: bool, female: bool },
    SetScores { athlete: u8, contest: u8, scores: Vec<f64> },
    RemoveContest { pos: u8 },
    RemoveAthlete { pos: u8 },
}

fn score() -> impl Strategy<Value = f64> {
    // Quarter points keep sums exact.
    (0u32..=400).prop_map(|q| f64::from(q) / 4.0)
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12).prop_map(|idx| Action::AddContest { idx }),
        (0u8..12, any::<bool>(), any::<bool>())
            .prop_map(|(idx, goofy, female)| Action::AddAthlete { idx, goofy, female }),
        (0u8..12, 0u8..12, prop::collection::vec(score(), 0..8))
            .prop_map(|(athlete, contest, scores)| Action::SetScores { athlete, contest, scores }),
        (0u8..10).prop_map(|pos| Action::RemoveContest { pos }),
        (0u8..10).prop_map(|pos| Action::RemoveAthlete { pos }),
    ]
}

fn run(actions: Vec<Action>) -> Tour {
    let mut tour = Tour::new();
    for action in actions {
        match action {
            Action::AddContest { idx } => {
                let _ = tour.add_contest(Contest::new(LOCATIONS[usize::from(idx)], "01/01/2025"));
            }
            Action::AddAthlete { idx, goofy, female } => {
                let stance = if goofy { Stance::Goofy } else { Stance::Regular };
                let gender = if female { Gender::Female } else { Gender::Male };
                let _ = tour.add_athlete(Athlete::new(NAMES[usize::from(idx)], stance, "USA", gender));
            }
            Action::SetScores { athlete, contest, scores } => {
                let _ = tour.set_scores(
                    NAMES[usize::from(athlete)],
                    LOCATIONS[usize::from(contest)],
                    scores,
                );
            }
            Action::RemoveContest { pos } => {
                let _ = tour.remove_contest(usize::from(pos));
            }
            Action::RemoveAthlete { pos } => {
                let _ = tour.remove_athlete(usize::from(pos));
            }
        }
    }
    tour
}

proptest! {
    #[test]
    fn registries_never_exceed_capacity(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let tour = run(actions);
        prop_assert!(tour.contests().count() <= DEFAULT_CAPACITY);
        prop_assert!(tour.athletes().count() <= DEFAULT_CAPACITY);
    }

    #[test]
    fn score_books_only_reference_registered_contests(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let tour = run(actions);
        for athlete in tour.athletes() {
            for (location, _) in athlete.scores.iter() {
                prop_assert!(tour.contests().find_by_location(location).is_some());
            }
        }
    }

    #[test]
    fn text_round_trip_preserves_order_and_scores(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let tour = run(actions);
        let loaded = decode(&encode(&tour), DEFAULT_CAPACITY);
        prop_assert!(loaded.issues.is_empty());

        let names = |t: &Tour| t.athletes().iter().map(|a| a.name.clone()).collect::<Vec<_>>();
        let locations = |t: &Tour| t.contests().iter().map(|c| c.location.clone()).collect::<Vec<_>>();
        prop_assert_eq!(names(&loaded.tour), names(&tour));
        prop_assert_eq!(locations(&loaded.tour), locations(&tour));

        for (orig, back) in tour.athletes().iter().zip(loaded.tour.athletes()) {
            prop_assert_eq!(orig.stance, back.stance);
            prop_assert_eq!(orig.gender, back.gender);
            for contest in tour.contests() {
                prop_assert_eq!(orig.scores.get_scores(contest), back.scores.get_scores(contest));
                prop_assert_eq!(orig.scores.total_score(contest), back.scores.total_score(contest));
            }
        }
    }
}
