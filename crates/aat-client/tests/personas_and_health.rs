mod common;

use common::{client_for, persona_json};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn list_personas_parses_collection() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/personas/");
            then.status(200).json_body(json!({
                "personas": [persona_json("tech_enthusiast"), persona_json("health_wellness")],
                "total": 2
            }));
        })
        .await;

    let list = client_for(&server).list_personas().await.unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.personas[0].id, "tech_enthusiast");
    assert_eq!(list.personas[1].id, "health_wellness");
    assert_eq!(
        list.personas[0].interests,
        vec![
            "artificial intelligence",
            "startups",
            "artificial intelligence"
        ]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_persona_by_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/personas/tech_enthusiast");
            then.status(200).json_body(persona_json("tech_enthusiast"));
        })
        .await;

    let persona = client_for(&server)
        .get_persona("tech_enthusiast")
        .await
        .unwrap();
    assert_eq!(persona.name, "Tech Enthusiast");
    assert_eq!(persona.ideological_leaning, "center");
    assert_eq!(persona.subreddits, vec!["r/technology"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn unknown_persona_surfaces_404() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/personas/ghost");
            then.status(404)
                .json_body(json!({"detail": "Persona 'ghost' not found"}));
        })
        .await;

    let err = client_for(&server).get_persona("ghost").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Persona 'ghost' not found"));
}

#[tokio::test]
async fn health_check_reports_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/health");
            then.status(200).json_body(json!({
                "status": "healthy",
                "service": "algorithmic-accountability-translator",
                "version": "1.0.0"
            }));
        })
        .await;

    let health = client_for(&server).health_check().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.version, "1.0.0");
    mock.assert_async().await;
}
