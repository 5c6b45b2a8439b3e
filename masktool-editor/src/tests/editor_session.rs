use super::memory_session;
use crate::EditorSession;
use masktool_data::{
    json_storage, AdditionKind, FieldCriticality, FieldInput, FieldState, MaskType,
    MemoryMetaDataSource, MetaDataError, MetaDataStatus, Value,
};
use masktool_pipeline::PipelineError;
use std::path::{Path, PathBuf};

fn stored_name(
    session: &EditorSession,
    meta_path: &str,
) -> Option<String> {
    session
        .source()
        .read_meta_data(Path::new(meta_path))
        .unwrap()
        .and_then(|x| x.get("name").and_then(|x| x.as_str()).map(|x| x.to_string()))
}

#[test]
fn nothing_active_at_start() {
    let mut session = memory_session();
    assert!(session.active().is_none());
    assert!(session.status().is_none());
    assert!(!session.flush().unwrap());
    assert!(session.set_field("name", FieldInput::Text("Fox")).is_err());
}

#[test]
fn new_metadata_is_saved_on_switch() {
    let mut session = memory_session();
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert!(session.is_dirty());
    let uuid = session.active().unwrap().uuid().unwrap().to_string();
    assert!(!uuid.is_empty());

    session.switch_active(Path::new("/masks/owl.fbx")).unwrap();
    let stored = session
        .source()
        .read_meta_data(Path::new("/masks/fox.meta"))
        .unwrap()
        .unwrap();
    assert_eq!(stored["uuid"].as_str(), Some(uuid.as_str()));
    assert_eq!(session.active_path(), Some(Path::new("/masks/owl.fbx")));
}

#[test]
fn edits_are_saved_before_switching() {
    let mut session = memory_session();
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    session.set_field("name", FieldInput::Text("Fox")).unwrap();
    assert_eq!(stored_name(&session, "/masks/fox.meta"), None);

    session.switch_active(Path::new("/masks/owl.fbx")).unwrap();
    assert_eq!(
        stored_name(&session, "/masks/fox.meta").as_deref(),
        Some("Fox")
    );

    // Coming back uses the cached metadata
    let fox = session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert_eq!(fox.name(), "Fox");
}

#[test]
fn switching_to_the_active_mesh_keeps_pending_changes() {
    let mut session = memory_session();
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    session.flush().unwrap();
    session.set_field("author", FieldInput::Text("Ann")).unwrap();

    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert!(session.is_dirty());
}

#[test]
fn clean_metadata_is_not_rewritten() {
    let mut source = MemoryMetaDataSource::default();
    let mut stored = masktool_data::MaskMetaData::new();
    stored
        .record_mut()
        .set("name", FieldInput::Text("Fox"))
        .unwrap();
    source.insert(
        "/masks/fox.meta",
        json_storage::mask_meta_data_to_json(&stored),
    );

    let mut session = EditorSession::new(Box::new(source), FieldCriticality::default());
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert!(!session.is_dirty());
    assert_eq!(session.active().unwrap(), &stored);
    assert!(!session.flush().unwrap());
}

#[test]
fn unreadable_metadata_is_backed_up_before_replacing() {
    let mut source = MemoryMetaDataSource::default();
    let broken = serde_json::json!({ "name": "Fox", "colour": "red" });
    source.insert("/masks/fox.meta", broken.clone());

    let mut session = EditorSession::new(Box::new(source), FieldCriticality::default());
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert!(session.active_load_failed());
    assert_eq!(session.active().unwrap().name(), "");

    // Looking without touching leaves the file alone
    assert!(!session.flush().unwrap());
    assert_eq!(
        session
            .source()
            .read_meta_data(Path::new("/masks/fox.meta"))
            .unwrap(),
        Some(broken.clone())
    );

    session.set_field("name", FieldInput::Text("Fox")).unwrap();
    assert!(session.flush().unwrap());
    assert!(!session.active_load_failed());
    assert_eq!(
        session
            .source()
            .read_meta_data(&PathBuf::from("/masks/fox.meta.bak"))
            .unwrap(),
        Some(broken)
    );
    assert_eq!(
        stored_name(&session, "/masks/fox.meta").as_deref(),
        Some("Fox")
    );
}

#[test]
fn rejected_edit_keeps_previous_value() {
    let mut session = memory_session();
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    session
        .active_mut()
        .unwrap()
        .additions_mut()
        .append_default(AdditionKind::Emitter);

    session
        .set_addition_field(0, "num-particles", FieldInput::Text("250"))
        .unwrap();
    let result = session.set_addition_field(0, "num-particles", FieldInput::Text("abc"));
    match result {
        Err(PipelineError::MetaDataError(MetaDataError::NumericParse { field, text })) => {
            assert_eq!(field, "num-particles");
            assert_eq!(text, "abc");
        }
        _ => panic!("expected a numeric parse error"),
    }

    let emitter = session.active().unwrap().additions().get(0).unwrap();
    assert_eq!(emitter.get("num-particles").unwrap(), &Value::Integer(250));
    assert_eq!(emitter.get("num-particles").unwrap().as_f64(), Some(250.0));

    assert!(session
        .set_addition_field(3, "name", FieldInput::Text("x"))
        .is_err());
}

#[test]
fn status_and_field_state_follow_edits() {
    let mut session = memory_session();
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    assert_eq!(session.status(), Some(MetaDataStatus::Error));
    assert_eq!(session.field_state("name").unwrap(), FieldState::Error);
    assert_eq!(session.field_state("tags").unwrap(), FieldState::Warning);

    for field in ["name", "author", "category"] {
        session.set_field(field, FieldInput::Text("x")).unwrap();
    }
    assert_eq!(session.status(), Some(MetaDataStatus::Warning));
    assert_eq!(session.field_state("name").unwrap(), FieldState::Ok);

    for field in ["description", "tags", "license", "website"] {
        session.set_field(field, FieldInput::Text("x")).unwrap();
    }
    assert_eq!(session.status(), Some(MetaDataStatus::Good));

    session
        .set_field("do_not_release", FieldInput::Toggle(true))
        .unwrap();
    assert_eq!(session.status(), Some(MetaDataStatus::NoRelease));
}

#[test]
fn check_prefers_loaded_metadata() {
    let mut session = memory_session();
    assert_eq!(
        session.check(Path::new("/masks/fox.fbx")),
        (MetaDataStatus::Error, MaskType::Unknown)
    );

    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();
    session.set_field("is_morph", FieldInput::Toggle(true)).unwrap();
    assert_eq!(
        session.check(Path::new("/masks/fox.fbx")),
        (MetaDataStatus::Error, MaskType::Morph)
    );
}

#[test]
fn moves_at_the_list_ends_leave_the_file_alone() {
    let mut source = MemoryMetaDataSource::default();
    let mut stored = masktool_data::MaskMetaData::new();
    stored.additions_mut().append_default(AdditionKind::Image);
    stored.additions_mut().append_default(AdditionKind::Model);
    source.insert(
        "/masks/fox.meta",
        json_storage::mask_meta_data_to_json(&stored),
    );

    let mut session = EditorSession::new(Box::new(source), FieldCriticality::default());
    session.switch_active(Path::new("/masks/fox.fbx")).unwrap();

    assert!(!session.move_addition_up(0).unwrap());
    assert!(!session.move_addition_down(1).unwrap());
    assert!(!session.is_dirty());
    assert!(!session.flush().unwrap());
    assert!(session.move_addition_down(2).is_err());

    assert!(session.move_addition_down(0).unwrap());
    assert!(session.is_dirty());
    let labels = session.active().unwrap().additions().labels();
    assert_eq!(labels, vec!["model : ", "image : "]);
}
