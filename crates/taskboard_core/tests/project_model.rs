use taskboard_core::{Project, ProjectId, ProjectStatus};

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Build API", "Design and implement", 3);
    project.id = ProjectId::from("11111111-2222-4333-8444-555555555555");
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["title"], "Build API");
    assert_eq!(json["description"], "Design and implement");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn generated_id_is_a_uuid() {
    let project = Project::new("t", "description", 2);
    let parsed = uuid::Uuid::parse_str(project.id.as_str());
    assert!(parsed.is_ok(), "unexpected id: {}", project.id);
}

#[test]
fn status_names_are_stable() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.to_string(), "finished");
    assert_eq!(ProjectStatus::Active.label(), "ACTIVE PROJECTS");
}
