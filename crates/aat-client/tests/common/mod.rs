//! Shared fixtures for client integration tests.

#![allow(dead_code)]

use aat_client::ApiClient;
use httpmock::MockServer;
use serde_json::{Value, json};

/// Client rooted at the mock server's `/api` prefix.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.url("/api"))
}

pub fn persona_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Tech Enthusiast",
        "description": "Follows AI, startups and gadgets.",
        "interests": ["artificial intelligence", "startups", "artificial intelligence"],
        "ideological_leaning": "center",
        "subreddits": ["r/technology"],
        "youtube_channels": ["Two Minute Papers"],
        "search_terms": ["latest AI breakthroughs"]
    })
}

pub fn contract_json(id: &str, platform: &str) -> Value {
    json!({
        "id": id,
        "platform": platform,
        "personas_analyzed": ["progressive_activist", "conservative_traditional"],
        "generation_date": "2026-03-01T10:00:00.123456",
        "title": "Algorithmic Accountability Contract: Reddit Recommendation System",
        "executive_summary": "**Key Findings:**\n- The algorithm prioritizes ENGAGEMENT over DIVERSITY",
        "sections": [
            {
                "title": "1. Algorithmic Optimization Objectives",
                "content": "Watch time is the primary optimization target.",
                "evidence": ["Sensational content ranks 2.3x higher"],
                "statistics": {"engagement_correlation": "0.82"}
            },
            {
                "title": "2. Filter Bubble Analysis",
                "content": "Average topic diversity score: 0.34/1.0"
            }
        ],
        "visualizations": [
            {"type": "pie", "title": "Content Political Distribution",
             "data": {"labels": ["Left", "Center", "Right"], "values": [45, 15, 40]}}
        ],
        "methodology_note": "Inferred algorithmic behavior, not platform intent.",
        "raw_statistics": {"total_content_analyzed": 10000, "stance_detection_accuracy": 0.82}
    })
}

pub fn scrape_job_json(job_id: &str, platform: &str, status: &str) -> Value {
    json!({
        "job_id": job_id,
        "status": status,
        "platform": platform,
        "persona_ids": ["tech_enthusiast"],
        "progress": 0.0,
        "items_collected": 0,
        "message": "Job queued for processing"
    })
}
