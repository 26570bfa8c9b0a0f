use rowhouse_core::db::open_db_in_memory;
use rowhouse_core::repo::lookup::{self, BREEDS};
use rowhouse_core::{Dog, DogRepository, InvalidValue, RepoError, SqliteDogRepository};

#[test]
fn add_and_get_roundtrip_with_breed_join() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let id = repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();

    let loaded = repo.get_dog(id).unwrap().unwrap();
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.name, "Rex");
    assert_eq!(loaded.age, 4);
    assert_eq!(loaded.breed, "Boxer");
}

#[test]
fn repeated_breeds_share_one_dimension_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();
    repo.add_dog(&Dog::new("Bruno", 5, "Boxer")).unwrap();
    repo.add_dog(&Dog::new("Maple", 2, "Samoyed")).unwrap();

    assert_eq!(lookup::count(&conn, &BREEDS).unwrap(), 2);
}

#[test]
fn breed_lookup_is_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();
    let id = repo.add_dog(&Dog::new("Tyson", 3, "BOXER")).unwrap();

    assert_eq!(lookup::count(&conn, &BREEDS).unwrap(), 1);
    // The first spelling seen is the one stored.
    assert_eq!(repo.get_dog(id).unwrap().unwrap().breed, "Boxer");
}

#[test]
fn find_by_name_is_exact_and_ordered() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let first = repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();
    let second = repo.add_dog(&Dog::new("Rex", 7, "Samoyed")).unwrap();
    repo.add_dog(&Dog::new("Rexford", 1, "Corgi")).unwrap();

    let rexes = repo.find_dogs_by_name("Rex").unwrap();
    assert_eq!(rexes.len(), 2);
    assert_eq!(rexes[0].id, Some(first));
    assert_eq!(rexes[1].id, Some(second));

    assert!(repo.find_dogs_by_name("rex").unwrap().is_empty());
}

#[test]
fn update_overwrites_and_rereads_by_new_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let id = repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();

    let rereads = repo.update_dog(id, &Dog::new("Max", 5, "Husky")).unwrap();
    assert_eq!(rereads.len(), 1);
    assert_eq!(rereads[0].id, Some(id));
    assert_eq!(rereads[0].name, "Max");
    assert_eq!(rereads[0].age, 5);
    assert_eq!(rereads[0].breed, "Husky");

    assert!(repo.find_dogs_by_name("Rex").unwrap().is_empty());
}

#[test]
fn update_missing_id_changes_nothing_but_still_rereads() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let existing = repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap();

    // The re-read keys on the replacement's name, so an existing same-named
    // dog still comes back even though no row changed.
    let rereads = repo.update_dog(999, &Dog::new("Rex", 9, "Husky")).unwrap();
    assert_eq!(rereads.len(), 1);
    assert_eq!(rereads[0].id, Some(existing));
    assert_eq!(rereads[0].age, 4);
    assert_eq!(rereads[0].breed, "Boxer");
}

#[test]
fn delete_counts_rows_and_tolerates_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let id = repo.add_dog(&Dog::new("Maple", 2, "Samoyed")).unwrap();

    assert_eq!(repo.delete_dog(id).unwrap(), 1);
    assert!(repo.get_dog(id).unwrap().is_none());
    assert_eq!(repo.delete_dog(id).unwrap(), 0);
}

#[test]
fn add_rejects_blank_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    let err = repo.add_dog(&Dog::new("", 3, "Boxer")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Invalid(InvalidValue::EmptyField { field: "name" })
    ));

    let err = repo.add_dog(&Dog::new("Rex", 3, "  ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Invalid(InvalidValue::EmptyField { field: "breed" })
    ));

    assert_eq!(lookup::count(&conn, &BREEDS).unwrap(), 0);
}

#[test]
fn store_rejection_surfaces_as_persistence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    conn.execute_batch("DROP TABLE dogs;").unwrap();

    let err = repo.add_dog(&Dog::new("Rex", 4, "Boxer")).unwrap_err();
    assert!(matches!(err, RepoError::Persistence(_)));
}

#[test]
fn increment_age_adds_one_year() {
    let mut dog = Dog::new("Rex", 4, "Boxer");
    dog.increment_age();
    assert_eq!(dog.age, 5);
}

#[test]
fn display_formats_with_and_without_id() {
    let fresh = Dog::new("Rex", 4, "Boxer");
    assert_eq!(fresh.to_string(), "Rex, a 4 year old Boxer");

    let stored = Dog::with_id(3, "Rex", 4, "Boxer");
    assert_eq!(stored.to_string(), "[id: 3] Rex, a 4 year old Boxer");
}
