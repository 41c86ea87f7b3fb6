use dragboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Build shed", "Construct backyard shed", 3);
    project.id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Build shed");
    assert_eq!(json["people_count"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn unknown_status_is_rejected_on_decode() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "x",
        "description": "y",
        "people_count": 1,
        "status": "archived"
    });

    assert!(serde_json::from_value::<Project>(value).is_err());
}
