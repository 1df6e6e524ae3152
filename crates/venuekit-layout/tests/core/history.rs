use venuekit_layout::{
    CentralFeature, FeatureKind, HistoryManager, LayoutSnapshot, Section, Shape,
};

fn snapshot(names: &[&str]) -> LayoutSnapshot {
    let sections: Vec<Section> = names
        .iter()
        .map(|n| Section::new(*n, Some(Shape::rectangle(0.0, 0.0, 100.0, 100.0))))
        .collect();
    LayoutSnapshot::new(&sections, None)
}

#[test]
fn test_undo_redo_round_trip() {
    let s0 = snapshot(&[]);
    let s1 = snapshot(&["A"]);
    let mut history = HistoryManager::with_initial(s0.clone(), 50);
    history.push(s1.clone());

    assert_eq!(history.undo(), Some(&s0));
    assert_eq!(history.redo(), Some(&s1));
    assert!(history.redo().is_none());
}

#[test]
fn test_push_after_undo_discards_forward_states() {
    let mut history = HistoryManager::with_initial(snapshot(&[]), 50);
    history.push(snapshot(&["A"]));
    history.push(snapshot(&["A", "B"]));
    history.undo();

    let branch = snapshot(&["C"]);
    history.push(branch.clone());

    assert_eq!(history.len(), 3);
    assert!(!history.can_redo());
    assert_eq!(history.current(), Some(&branch));
}

#[test]
fn test_fifty_one_pushes_keep_fifty() {
    let mut history = HistoryManager::new(50);
    let snapshots: Vec<LayoutSnapshot> = (0..51)
        .map(|i| {
            let name = format!("S{i}");
            snapshot(&[name.as_str()])
        })
        .collect();
    for s in &snapshots {
        history.push(s.clone());
    }

    assert_eq!(history.len(), 50);
    assert_eq!(history.index(), 49);
    assert_eq!(history.current(), Some(&snapshots[50]));

    let mut oldest = None;
    while let Some(s) = history.undo() {
        oldest = Some(s.clone());
    }
    assert_eq!(oldest.as_ref(), Some(&snapshots[1]));
}

#[test]
fn test_push_snapshot_deep_copies() {
    let mut sections = vec![Section::new("A", Some(Shape::rectangle(0.0, 0.0, 10.0, 10.0)))];
    let feature = CentralFeature::new(FeatureKind::Stage, Shape::rectangle(0.0, 0.0, 5.0, 5.0));

    let mut history = HistoryManager::new(50);
    history.push_snapshot(&sections, Some(&feature));

    sections[0].name = "Changed".to_string();
    let stored = history.current().unwrap();
    assert_eq!(stored.sections[0].name, "A");
    assert_eq!(stored.central_feature.as_ref(), Some(&feature));
}
