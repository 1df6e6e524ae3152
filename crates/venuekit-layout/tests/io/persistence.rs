use std::sync::Arc;

use tempfile::TempDir;
use venuekit_core::{Error, LayoutError, PersistenceError};
use venuekit_layout::persistence::FILE_FORMAT_VERSION;
use venuekit_layout::{
    BackgroundImage, CentralFeature, EditorSession, FeatureKind, JsonFileStore, LayoutDocument,
    LayoutFile, LayoutStore, MemoryStore, Obstruction, SeatCapacity, Section, Shape,
};
use venuekit_settings::EditorSettings;

fn sample_document() -> LayoutDocument {
    let mut document = LayoutDocument::new();
    let mut floor = Section::new("Floor", Some(Shape::rectangle(0.0, 0.0, 500.0, 300.0)))
        .with_capacity(SeatCapacity::grid(10, 20));
    floor
        .obstructions
        .push(Obstruction::new("Pillar", Shape::rectangle(10.0, 10.0, 30.0, 30.0)));
    document.add_section(floor);
    document.add_section(Section::new(
        "Balcony",
        Some(Shape::polygon(vec![
            venuekit_layout::Point::new(0.0, 400.0),
            venuekit_layout::Point::new(300.0, 400.0),
            venuekit_layout::Point::new(150.0, 500.0),
        ])),
    ));
    document.central_feature = Some(CentralFeature::new(
        FeatureKind::Stage,
        Shape::rectangle(100.0, -200.0, 400.0, -50.0),
    ));
    document.background = Some(BackgroundImage::new("floorplan.png"));
    document
}

#[tokio::test]
async fn test_json_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());
    let document = sample_document();

    store.save_layout("arena", &document).await.unwrap();
    let loaded = store.load_layout("arena").await.unwrap();

    assert_eq!(loaded, document);
    assert!(temp_dir.path().join("arena.json").exists());
}

#[tokio::test]
async fn test_json_store_missing_layout() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    let result = store.load_layout("nowhere").await;
    assert!(matches!(
        result,
        Err(PersistenceError::NotFound { venue_id }) if venue_id == "nowhere"
    ));
}

#[tokio::test]
async fn test_json_store_creates_root_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("layouts").join("v1");
    let store = JsonFileStore::new(&root);

    store.save_layout("hall", &sample_document()).await.unwrap();
    assert!(root.join("hall.json").exists());
}

#[tokio::test]
async fn test_json_store_keeps_creation_time() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());
    let path = store.path_for("arena").unwrap();

    store.save_layout("arena", &sample_document()).await.unwrap();
    let first = JsonFileStore::read_file(&path).await.unwrap();

    store.save_layout("arena", &LayoutDocument::new()).await.unwrap();
    let second = JsonFileStore::read_file(&path).await.unwrap();

    assert_eq!(first.metadata.created, second.metadata.created);
    assert!(second.metadata.modified >= first.metadata.modified);
    assert!(second.sections.is_empty());
    assert_eq!(second.version, FILE_FORMAT_VERSION);
}

#[tokio::test]
async fn test_json_store_rejects_future_format() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    let mut file = LayoutFile::new("arena", &sample_document());
    file.version = "2.0".to_string();
    std::fs::write(
        store.path_for("arena").unwrap(),
        serde_json::to_string(&file).unwrap(),
    )
    .unwrap();

    let result = store.load_layout("arena").await;
    assert!(matches!(result, Err(PersistenceError::Rejected(_))));
}

#[tokio::test]
async fn test_json_store_reports_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());
    std::fs::write(store.path_for("arena").unwrap(), "{ not json").unwrap();

    let result = store.load_layout("arena").await;
    assert!(matches!(result, Err(PersistenceError::Json(_))));
}

#[tokio::test]
async fn test_session_save_and_open() {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn LayoutStore> = Arc::new(JsonFileStore::new(temp_dir.path()));

    let settings = EditorSettings::default();
    let mut session = EditorSession::with_document("arena", sample_document(), settings)
        .with_store(store.clone());
    session.save().await.unwrap();

    let reopened = EditorSession::open("arena", EditorSettings::default(), store)
        .await
        .unwrap();
    assert_eq!(reopened.document(), session.document());
    assert!(!reopened.can_undo());
    assert_eq!(reopened.total_capacity(), 200);
}

#[tokio::test]
async fn test_save_requires_shapes_for_seated_sections() {
    let store = Arc::new(MemoryStore::new());
    let mut session =
        EditorSession::new("arena", EditorSettings::default()).with_store(store.clone());
    session.add_section("Unplaced", SeatCapacity::total(50));

    let result = session.save().await;
    assert!(matches!(
        result,
        Err(Error::Layout(LayoutError::MissingShape { .. }))
    ));
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_rejected_save_leaves_document_intact() {
    let store = Arc::new(MemoryStore::new());
    store.set_rejecting(true);
    let mut session =
        EditorSession::with_document("arena", sample_document(), EditorSettings::default())
            .with_store(store.clone());
    let before = session.document().clone();

    let result = session.save().await;
    assert!(matches!(
        result,
        Err(Error::Persistence(PersistenceError::Rejected(_)))
    ));
    assert_eq!(*session.document(), before);
    assert!(store.get("arena").is_none());

    store.set_rejecting(false);
    session.save().await.unwrap();
    assert_eq!(store.get("arena").as_ref(), Some(session.document()));
}

#[tokio::test]
async fn test_load_sanitizes_invalid_geometry() {
    let store = Arc::new(MemoryStore::new());
    let mut document = sample_document();
    document.sections[1].shape = Some(Shape::polygon(vec![
        venuekit_layout::Point::new(0.0, 0.0),
        venuekit_layout::Point::new(10.0, 10.0),
    ]));
    store.insert("arena", document);

    let session = EditorSession::open("arena", EditorSettings::default(), store)
        .await
        .unwrap();
    assert!(session.document().sections[1].shape.is_none());
    assert!(session.document().sections[0].shape.is_some());
}

#[tokio::test]
async fn test_open_missing_venue_fails() {
    let store = Arc::new(MemoryStore::new());
    let result = EditorSession::open("ghost", EditorSettings::default(), store).await;
    assert!(matches!(
        result,
        Err(Error::Persistence(PersistenceError::NotFound { .. }))
    ));
}
