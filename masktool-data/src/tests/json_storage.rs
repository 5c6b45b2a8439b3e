use super::addition;
use crate::json_storage::{
    mask_meta_data_from_json, mask_meta_data_to_json, read_meta_data, write_meta_data,
};
use crate::{
    check_meta_data_file, create_get_meta_data, AdditionKind, FieldCriticality, FieldInput,
    FileSystemMetaDataSource, MaskMetaData, MaskType, MemoryMetaDataSource, MetaDataError,
    MetaDataSource, MetaDataStatus, PersistenceError, Value,
};
use std::path::{Path, PathBuf};
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let path = std::env::temp_dir().join(format!("masktool-data-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&path).unwrap();
    path
}

fn sample_meta_data() -> MaskMetaData {
    let mut meta_data = MaskMetaData::new();
    meta_data
        .record_mut()
        .set("name", FieldInput::Text("Fox"))
        .unwrap();
    meta_data
        .record_mut()
        .set("texture_max", FieldInput::Selection(5))
        .unwrap();

    let additions = meta_data.additions_mut();
    additions.append(addition(AdditionKind::Image, "fur"));
    let index = additions.append_default(AdditionKind::Emitter);
    additions
        .get_mut(index)
        .unwrap()
        .set(
            "force-max",
            FieldInput::Component {
                index: 0,
                text: "2.5",
            },
        )
        .unwrap();
    meta_data
}

#[test]
fn stored_json_keeps_schema_order_and_nesting() {
    let json = mask_meta_data_to_json(&sample_meta_data());
    let object = json.as_object().unwrap();

    let keys: Vec<_> = object.keys().map(|x| x.as_str()).collect();
    assert_eq!(keys[0], "name");
    assert_eq!(keys.last(), Some(&"additions"));
    assert_eq!(object["texture_max"], serde_json::json!(1024));

    let additions = object["additions"].as_array().unwrap();
    assert_eq!(additions.len(), 2);
    assert_eq!(additions[0]["type"], serde_json::json!("image"));
    assert_eq!(additions[1]["force-max"], serde_json::json!([2.5, 10.0, 0.0]));
    assert_eq!(additions[1]["num-particles"], serde_json::json!(100));
}

#[test]
fn meta_data_survives_storage() {
    let meta_data = sample_meta_data();
    let loaded = mask_meta_data_from_json(&mask_meta_data_to_json(&meta_data)).unwrap();
    assert_eq!(loaded, meta_data);
    assert_eq!(loaded.additions().labels(), vec!["image : fur", "emitter : "]);
}

#[test]
fn missing_fields_get_defaults() {
    let json = serde_json::json!({
        "name": "Fox",
        "uuid": "3e0e1b76-6a4e-4c2a-9a62-7d7c5f1f5d84",
        "additions": [{ "type": "model", "name": "head", "mesh": "meshHead" }]
    });

    let loaded = mask_meta_data_from_json(&json).unwrap();
    assert_eq!(loaded.name(), "Fox");
    assert_eq!(loaded.record().get("texture_max").unwrap(), &Value::Integer(256));
    let model = loaded.additions().get(0).unwrap();
    assert_eq!(model.get_string("material"), Some(""));
    assert_eq!(model.get_string("mesh"), Some("meshHead"));
}

#[test]
fn files_without_additions_load() {
    let json = serde_json::json!({ "name": "Fox" });
    let loaded = mask_meta_data_from_json(&json).unwrap();
    assert!(loaded.additions().is_empty());
}

fn load_error(json: serde_json::Value) -> MetaDataError {
    match mask_meta_data_from_json(&json) {
        Err(PersistenceError::MetaData(e)) => e,
        other => panic!("expected a schema error, got {:?}", other),
    }
}

#[test]
fn schema_drift_fails_the_load() {
    assert_eq!(
        load_error(serde_json::json!({ "name": "Fox", "colour": "red" })),
        MetaDataError::UnknownField("colour".to_string())
    );
    assert_eq!(
        load_error(serde_json::json!({ "is_vip": "yes" })),
        MetaDataError::TypeMismatch {
            field: "is_vip".to_string(),
            expected: "boolean",
            found: "string",
        }
    );
    assert_eq!(
        load_error(serde_json::json!({ "texture_max": 300 })),
        MetaDataError::InvalidEnumValue {
            field: "texture_max".to_string(),
            value: 300,
        }
    );
    assert_eq!(
        load_error(serde_json::json!({ "additions": [{ "type": "particle" }] })),
        MetaDataError::UnknownKind("particle".to_string())
    );
    assert!(matches!(
        load_error(serde_json::json!({
            "additions": [{ "type": "emitter", "force-min": [1.0, 2.0] }]
        })),
        MetaDataError::TypeMismatch { .. }
    ));
}

#[test]
fn malformed_documents_fail_the_load() {
    assert!(mask_meta_data_from_json(&serde_json::json!([])).is_err());
    assert!(mask_meta_data_from_json(&serde_json::json!({ "additions": {} })).is_err());
    assert!(mask_meta_data_from_json(&serde_json::json!({ "additions": [{ "name": "x" }] })).is_err());
}

#[test]
fn whole_numbers_load_into_float_fields() {
    let json = serde_json::json!({
        "additions": [{ "type": "emitter", "lifetime": 3, "force-min": [0, 1, 2] }]
    });
    let loaded = mask_meta_data_from_json(&json).unwrap();
    let emitter = loaded.additions().get(0).unwrap();
    assert_eq!(emitter.get("lifetime").unwrap(), &Value::Float(3.0));
    assert_eq!(
        emitter.get("force-min").unwrap(),
        &Value::FloatVector(vec![0.0, 1.0, 2.0])
    );
}

#[test]
fn files_round_trip_on_disk() {
    let dir = temp_dir();
    let path = dir.join("nested").join("fox.meta");
    let json = mask_meta_data_to_json(&sample_meta_data());

    write_meta_data(&path, &json).unwrap();
    assert_eq!(read_meta_data(&path).unwrap(), json);

    let missing = read_meta_data(&dir.join("missing.meta"));
    assert!(matches!(missing, Err(PersistenceError::IoError(_))));

    std::fs::write(dir.join("broken.meta"), "{ not json").unwrap();
    assert!(matches!(
        read_meta_data(&dir.join("broken.meta")),
        Err(PersistenceError::JsonError(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn file_system_source_backs_up_before_overwrite() {
    let dir = temp_dir();
    let path = dir.join("fox.meta");
    let mut source = FileSystemMetaDataSource::default();

    assert_eq!(source.read_meta_data(&path).unwrap(), None);
    assert_eq!(source.back_up(&path).unwrap(), None);

    source
        .write_meta_data(&path, &serde_json::json!({ "name": "Fox" }))
        .unwrap();
    let backup = source.back_up(&path).unwrap().unwrap();
    assert_eq!(backup, dir.join("fox.meta.bak"));
    assert_eq!(
        source.read_meta_data(&backup).unwrap(),
        Some(serde_json::json!({ "name": "Fox" }))
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn create_get_meta_data_creates_or_loads() {
    let mesh = Path::new("masks/fox.fbx");
    let mut source = MemoryMetaDataSource::default();

    let (created, is_new) = create_get_meta_data(&source, mesh).unwrap();
    assert!(is_new);
    assert!(!created.uuid().unwrap().is_empty());

    source.insert(
        "masks/fox.meta",
        serde_json::json!({ "name": "Fox", "uuid": "" }),
    );
    let (loaded, is_new) = create_get_meta_data(&source, mesh).unwrap();
    assert!(!is_new);
    assert_eq!(loaded.name(), "Fox");
    // an empty uuid is filled in
    assert_eq!(loaded.uuid().unwrap().len(), 36);
}

#[test]
fn check_meta_data_file_classifies_without_loading_into_a_session() {
    let criticality = FieldCriticality::default();
    let mut source = MemoryMetaDataSource::default();
    assert_eq!(
        check_meta_data_file(&source, Path::new("a.fbx"), &criticality),
        (MetaDataStatus::Error, MaskType::Unknown)
    );

    source.insert(
        "a.meta",
        serde_json::json!({
            "name": "A", "author": "me", "category": "c", "description": "d", "tags": "t",
            "license": "l", "website": "w", "is_morph": true
        }),
    );
    assert_eq!(
        check_meta_data_file(&source, Path::new("a.fbx"), &criticality),
        (MetaDataStatus::Good, MaskType::Morph)
    );

    source.insert("a.meta", serde_json::json!({ "name": 5 }));
    assert_eq!(
        check_meta_data_file(&source, Path::new("a.fbx"), &criticality),
        (MetaDataStatus::Error, MaskType::Unknown)
    );
}

#[test]
fn sequences_stored_as_images_load_as_sequences() {
    let stored = serde_json::json!({
        "name": "Fox",
        "additions": [
            {
                "type": "image",
                "name": "anim",
                "image": "fox.png",
                "rows": 4,
                "cols": 4,
                "first": 0,
                "last": 15,
                "rate": 1.0,
                "mode": "repeat"
            },
            { "type": "image", "name": "fur", "file": "fur.png" }
        ]
    });

    let meta_data = mask_meta_data_from_json(&stored).unwrap();
    let sequence = meta_data.additions().get(0).unwrap();
    assert_eq!(sequence.kind(), "sequence");
    assert_eq!(sequence.get_string("type"), Some("sequence"));
    assert_eq!(sequence.get_string("image"), Some("fox.png"));
    assert_eq!(sequence.get("last").unwrap(), &Value::Integer(15));
    assert_eq!(sequence.to_display_label(), "sequence : anim");

    let image = meta_data.additions().get(1).unwrap();
    assert_eq!(image.kind(), "image");
    assert_eq!(image.get_string("file"), Some("fur.png"));

    let saved = mask_meta_data_to_json(&meta_data);
    assert_eq!(saved["additions"][0]["type"], serde_json::json!("sequence"));
    assert_eq!(
        mask_meta_data_from_json(&saved).unwrap().additions(),
        meta_data.additions()
    );
}

#[test]
fn image_with_foreign_fields_is_still_rejected() {
    let stored = serde_json::json!({
        "additions": [{ "type": "image", "name": "fur", "file": "fur.png", "rows": 2 }]
    });

    match mask_meta_data_from_json(&stored) {
        Err(PersistenceError::MetaData(MetaDataError::UnknownField(field))) => {
            assert_eq!(field, "rows")
        }
        _ => panic!("expected an unknown field error"),
    }
}
