use slstour::{
    athlete::Athlete,
    contest::Contest,
    core::{error::TourError, registry::ContestRegistry, tour::Tour},
    types::{EntityKind, Gender, Stance},
};

fn contest(i: usize) -> Contest {
    Contest::new(format!("City{}", char::from(b'A' + i as u8)), "01/06/2025")
}

fn athlete(name: &str) -> Athlete {
    Athlete::new(name, Stance::Goofy, "BRA", Gender::Female)
}

#[test]
fn ninth_contest_is_rejected_and_registry_stays_at_eight() {
    let mut reg = ContestRegistry::new();
    for i in 0..8 {
        assert_eq!(reg.add(contest(i)).unwrap(), i + 1);
    }
    assert!(reg.is_full());

    let err = reg.add(contest(8)).unwrap_err();
    assert_eq!(
        err,
        TourError::CapacityExceeded {
            kind: EntityKind::Contest,
            capacity: 8
        }
    );
    assert_eq!(reg.count(), 8);
}

#[test]
fn ninth_athlete_is_rejected() {
    let mut tour = Tour::new();
    for name in ["Huston", "Eaton", "Hoban", "Shirai", "Ribeiro", "Gustavo", "Foy", "Jordan"] {
        tour.add_athlete(athlete(name)).unwrap();
    }
    let err = tour.add_athlete(athlete("Milou")).unwrap_err();
    assert!(matches!(err, TourError::CapacityExceeded { kind: EntityKind::Athlete, .. }));
    assert_eq!(tour.athletes().count(), 8);
}

#[test]
fn positions_are_one_based() {
    let mut reg = ContestRegistry::new();
    assert!(reg.is_empty());
    reg.add(contest(0)).unwrap();

    assert_eq!(reg.get(1).unwrap().location, "CityA");
    assert_eq!(
        reg.get(0).unwrap_err(),
        TourError::OutOfRange {
            kind: EntityKind::Contest,
            position: 0,
            count: 1
        }
    );
    assert!(matches!(reg.get(2), Err(TourError::OutOfRange { .. })));
}

#[test]
fn remove_compacts_later_entries() {
    let mut reg = ContestRegistry::new();
    for i in 0..4 {
        reg.add(contest(i)).unwrap();
    }

    let removed = reg.remove(2).unwrap();
    assert_eq!(removed.location, "CityB");
    assert_eq!(reg.count(), 3);
    assert_eq!(reg.get(2).unwrap().location, "CityC");
    assert_eq!(reg.get(3).unwrap().location, "CityD");
    assert_eq!(reg.position_of("CityD"), Some(3));
}

#[test]
fn remove_out_of_range_has_no_effect() {
    let mut reg = ContestRegistry::new();
    reg.add(contest(0)).unwrap();

    assert!(matches!(reg.remove(0), Err(TourError::OutOfRange { .. })));
    assert!(matches!(reg.remove(5), Err(TourError::OutOfRange { .. })));
    assert_eq!(reg.count(), 1);
}

#[test]
fn duplicate_keys_are_rejected() {
    let mut reg = ContestRegistry::new();
    reg.add(Contest::new("Rome", "10/05/2024")).unwrap();

    let err = reg.add(Contest::new("Rome", "11/05/2024")).unwrap_err();
    assert_eq!(
        err,
        TourError::Duplicate {
            kind: EntityKind::Contest,
            key: "Rome".to_string()
        }
    );
    assert_eq!(reg.count(), 1);
    assert_eq!(reg.find_by_location("Rome").unwrap().date, "10/05/2024");
    assert!(reg.find_by_location("Paris").is_none());
    assert!(reg.find_by_location("rome").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    let mut tour = Tour::new();
    tour.add_athlete(athlete("Smith")).unwrap();

    assert!(tour.athletes().find_by_name("Smith").is_some());
    assert!(tour.athletes().find_by_name("smith").is_none());
}

#[test]
fn custom_capacity_is_honoured() {
    let mut reg = ContestRegistry::with_capacity(2);
    reg.add(contest(0)).unwrap();
    reg.add(contest(1)).unwrap();
    assert!(reg.is_full());
    assert!(reg.add(contest(2)).is_err());
    assert_eq!(reg.capacity(), 2);
}

#[test]
fn clear_empties_both_registries() {
    let mut tour = Tour::with_capacity(4);
    tour.add_contest(contest(0)).unwrap();
    tour.add_athlete(athlete("Smith")).unwrap();

    tour.clear();
    assert!(tour.contests().is_empty());
    assert!(tour.athletes().is_empty());
    assert_eq!(tour.athletes().capacity(), 4);
}
