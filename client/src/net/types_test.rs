use super::*;

#[test]
fn project_deserializes_camel_case_record() {
    let json = r##"{
        "id": 2,
        "title": "To do List",
        "description": "Schedule organizer",
        "tags": ["HTML", "Tailwind CSS"],
        "githubUrl": "https://github.com/example/todo",
        "liveUrl": "#",
        "image": "/images/todo.png"
    }"##;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.id, 2);
    assert_eq!(project.tags, vec!["HTML", "Tailwind CSS"]);
    assert_eq!(project.github_url, "https://github.com/example/todo");
    assert_eq!(project.live_url, "#");
}

#[test]
fn project_accepts_snake_case_columns() {
    let json = r#"{
        "id": 1,
        "title": "Calc",
        "description": "d",
        "tags": [],
        "github_url": "https://github.com/example/calc",
        "live_url": "https://example.com/calc",
        "image": "calc.png"
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.github_url, "https://github.com/example/calc");
    assert_eq!(project.live_url, "https://example.com/calc");
}

#[test]
fn project_missing_tags_defaults_to_empty() {
    let json = r#"{"id":3,"title":"t","description":"d","githubUrl":"g","liveUrl":"l","image":"i"}"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert!(project.tags.is_empty());
}

#[test]
fn project_serializes_camel_case() {
    let project = Project {
        id: 7,
        title: "t".into(),
        description: "d".into(),
        tags: vec!["Rust".into()],
        github_url: "g".into(),
        live_url: "l".into(),
        image: "i".into(),
    };
    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(value["githubUrl"], "g");
    assert_eq!(value["liveUrl"], "l");
    assert!(value.get("github_url").is_none());
}

#[test]
fn api_error_body_reads_error_field() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"upstream timed out"}"#).unwrap();
    assert_eq!(body.error, "upstream timed out");
}
