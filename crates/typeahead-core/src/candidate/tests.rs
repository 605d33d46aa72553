use super::*;
use serde_json::json;

#[test]
fn from_values_keys_by_position() {
    let candidates = Candidates::from_values(["Apple", "Apricot"]);

    assert_eq!(
        candidates.as_slice(),
        &[
            Candidate::Scalar {
                key: Value::Uint(0),
                value: Value::from("Apple"),
            },
            Candidate::Scalar {
                key: Value::Uint(1),
                value: Value::from("Apricot"),
            },
        ]
    );
}

#[test]
fn from_json_maps_objects_to_groups_in_encounter_order() {
    let candidates = Candidates::from_json(&json!({
        "Veg": ["Carrot"],
        "Fruits": ["Apple", "Apricot"],
        "loose": "Lemon",
    }))
    .expect("object source should load");

    let labels: Vec<_> = candidates
        .iter()
        .filter_map(|candidate| match candidate {
            Candidate::Group(group) => Some(group.label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Veg", "Fruits"]);

    assert_eq!(
        candidates[2],
        Candidate::Scalar {
            key: Value::from("loose"),
            value: Value::from("Lemon"),
        }
    );
}

#[test]
fn from_json_maps_objects_inside_arrays_to_records() {
    let candidates = Candidates::from_json(&json!([
        { "Title": "Apple", "ID": 3, "Tags": ["x"] },
        7,
    ]))
    .expect("array source should load");

    let Candidate::Record(record) = &candidates[0] else {
        panic!("object inside an array should be a record");
    };
    assert_eq!(record.get("Title"), Some(&Value::from("Apple")));
    assert_eq!(record.get("ID"), Some(&Value::Int(3)));
    assert_eq!(record.get("Tags"), Some(&Value::Null));

    assert_eq!(
        candidates[1],
        Candidate::Scalar {
            key: Value::Uint(1),
            value: Value::Int(7),
        }
    );
}

#[test]
fn from_json_rejects_scalars() {
    let err = Candidates::from_json(&json!("Apple")).expect_err("scalar source should fail");

    assert!(err.message.contains("a string"));
}

#[test]
fn deserializes_through_from_json() {
    let candidates: Candidates =
        serde_json::from_str(r#"{"Fruits": {"a": "Apple"}}"#).expect("source should deserialize");

    let Candidate::Group(group) = &candidates[0] else {
        panic!("nested object should be a group");
    };
    assert_eq!(group.label, "Fruits");
    assert_eq!(
        group.children.as_slice(),
        &[Candidate::Scalar {
            key: Value::from("a"),
            value: Value::from("Apple"),
        }]
    );
}

#[test]
fn builders_compose_nested_groups() {
    let candidates = Candidates::new()
        .with_group(
            "Fruit",
            Candidates::new().with_record(CandidateRecord::new().with("Title", "Apple")),
        )
        .with_value("k", "Kale");

    assert_eq!(candidates.len(), 2);
    assert!(matches!(candidates[0], Candidate::Group(_)));
}
