use rowhouse_core::model::task::completed_from_flag;
use rowhouse_core::{InvalidValue, Task};

#[test]
fn new_task_starts_unpersisted_and_open() {
    let task = Task::new("write report");

    assert_eq!(task.id, None);
    assert_eq!(task.description, "write report");
    assert!(task.creation_datetime > 0);
    assert!(!task.completed);
}

#[test]
fn completed_flag_roundtrips_through_setter() {
    let mut task = Task::new("flag dance");

    task.set_completed_flag(1).unwrap();
    assert!(task.completed);
    assert_eq!(task.completed_flag(), 1);

    task.set_completed_flag(0).unwrap();
    assert!(!task.completed);
    assert_eq!(task.completed_flag(), 0);
}

#[test]
fn out_of_domain_flag_is_rejected_and_state_unchanged() {
    let mut task = Task::new("strict flag");
    task.set_completed_flag(1).unwrap();

    for bad in [-1, 2, 7] {
        let err = task.set_completed_flag(bad).unwrap_err();
        assert_eq!(
            err,
            InvalidValue::FlagOutOfRange {
                field: "completed",
                value: bad
            }
        );
        assert!(task.completed, "failed assignment must not change state");
    }
}

#[test]
fn completed_from_flag_maps_exactly_zero_and_one() {
    assert!(!completed_from_flag(0).unwrap());
    assert!(completed_from_flag(1).unwrap());
    assert!(completed_from_flag(2).is_err());
    assert!(completed_from_flag(-1).is_err());
}

#[test]
fn validate_rejects_blank_description() {
    let err = Task::new("").validate().unwrap_err();
    assert_eq!(
        err,
        InvalidValue::EmptyField {
            field: "description"
        }
    );

    assert!(Task::new("real work").validate().is_ok());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task = Task::with_id(7, "ship it", 1_724_630_400_000, true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["description"], "ship it");
    assert_eq!(json["creation_datetime"], 1_724_630_400_000_i64);
    assert_eq!(json["completed"], true);
}

#[test]
fn unpersisted_task_serializes_null_id() {
    let json = serde_json::to_value(Task::new("fresh")).unwrap();
    assert!(json["id"].is_null());
}
