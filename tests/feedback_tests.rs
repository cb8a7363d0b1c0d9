// tests/feedback_tests.rs

use std::sync::Arc;

use talent_leaderboard::{
    config::Config,
    models::{
        feedback::{FeedbackAnswer, InterviewRating},
        talent::TalentProfile,
    },
    routes,
    state::AppState,
    store::{MemoryStore, memory::TalentRecord},
};
use uuid::Uuid;

async fn spawn_app(store: MemoryStore) -> String {
    let config = Config {
        database_url: String::new(),
        jwt_secret: "feedback_test_secret".to_string(),
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        db_max_connections: 1,
        leaderboard_size: 9,
    };

    let state = AppState {
        store: Arc::new(store),
        config,
    };
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// One tenant with one batch and two feedback groups.
struct Seed {
    store: MemoryStore,
    tenant: Uuid,
    batch: Uuid,
    technical: Uuid,
    attitude: Uuid,
    source: Uuid,
}

impl Seed {
    fn new() -> Self {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let batch = Uuid::new_v4();
        store.insert_tenant(tenant);
        store.insert_batch(tenant, batch, "ongoing");

        Self {
            store,
            tenant,
            batch,
            technical: Uuid::new_v4(),
            attitude: Uuid::new_v4(),
            source: Uuid::new_v4(),
        }
    }

    fn talent(&self, first_name: &str, source_id: Option<Uuid>) -> Uuid {
        let id = Uuid::new_v4();
        self.store.insert_talent(
            self.tenant,
            TalentRecord {
                profile: TalentProfile {
                    id,
                    first_name: first_name.to_string(),
                    last_name: "Tester".to_string(),
                    image: String::new(),
                },
                source_id,
                sales_person_id: None,
            },
        );
        id
    }

    fn answer(&self, talent_id: Uuid, first_name: &str, group: Uuid, keyword: &str, key: i32, max: i32) {
        let (group_name, group_order) = if group == self.technical {
            ("Technical", 1)
        } else {
            ("Attitude", 2)
        };

        self.store.record_feedback(
            self.tenant,
            FeedbackAnswer {
                talent_id,
                batch_id: self.batch,
                first_name: first_name.to_string(),
                last_name: "Tester".to_string(),
                group_id: group,
                group_name: group_name.to_string(),
                group_order,
                keyword: keyword.to_string(),
                question_id: Uuid::new_v4(),
                question_order: 1,
                has_options: true,
                deleted: false,
                chosen_key: Some(key),
                max_score: max,
            },
        );
    }
}

fn names(bucket: &serde_json::Value) -> Vec<String> {
    bucket
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["firstName"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn dashboard_splits_talents_into_buckets() {
    // Arrange
    let seed = Seed::new();
    let star = seed.talent("star", None);
    let solid = seed.talent("solid", None);
    let weak = seed.talent("weak", None);
    let edge = seed.talent("edge", None);

    seed.answer(star, "star", seed.technical, "Rust", 9, 10);
    seed.answer(star, "star", seed.attitude, "Teamwork", 10, 10);
    seed.answer(solid, "solid", seed.technical, "Rust", 6, 10);
    seed.answer(weak, "weak", seed.technical, "Rust", 2, 10);
    seed.answer(edge, "edge", seed.technical, "Rust", 8, 10);

    seed.store.record_interview(seed.tenant, InterviewRating { talent_id: star, batch_id: seed.batch, rating: 4.0 });
    seed.store.record_interview(seed.tenant, InterviewRating { talent_id: star, batch_id: seed.batch, rating: 5.0 });

    let tenant = seed.tenant;
    let batch = seed.batch;
    let address = spawn_app(seed.store).await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/api/tenants/{}/feedback/dashboard?batchId={}", address, tenant, batch))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body["outstandingCount"], 1);
    assert_eq!(body["goodCount"], 1);
    assert_eq!(body["averageCount"], 1);
    assert_eq!(names(&body["outstanding"]), vec!["star"]);
    assert_eq!(names(&body["good"]), vec!["solid"]);
    assert_eq!(names(&body["average"]), vec!["weak"]);

    let star_summary = &body["outstanding"][0];
    assert_eq!(star_summary["overallScore"], 9.5);
    assert_eq!(star_summary["interviewRating"], 4.5);
    assert_eq!(star_summary["bucket"], "Outstanding");
    assert_eq!(star_summary["groupScores"][0]["groupName"], "Technical");
    assert_eq!(star_summary["groupScores"][1]["groupName"], "Attitude");
    assert_eq!(star_summary["groupScores"][0]["keywordScores"][0]["keyword"], "Rust");

    assert!(body["good"][0]["interviewRating"].is_null());
    // "edge" scored exactly 8.0 and is in no bucket.
    assert_eq!(
        body["outstandingCount"].as_u64().unwrap()
            + body["goodCount"].as_u64().unwrap()
            + body["averageCount"].as_u64().unwrap(),
        3
    );
}

#[tokio::test]
async fn dashboard_forwards_source_filter() {
    // Arrange
    let seed = Seed::new();
    let from_source = seed.talent("referred", Some(seed.source));
    let other = seed.talent("walkin", None);
    seed.answer(from_source, "referred", seed.technical, "Rust", 9, 10);
    seed.answer(other, "walkin", seed.technical, "Rust", 9, 10);

    let (tenant, source) = (seed.tenant, seed.source);
    let address = spawn_app(seed.store).await;

    // Act
    let body: serde_json::Value = reqwest::Client::new()
        .get(format!("{}/api/tenants/{}/feedback/dashboard?sourceId={}", address, tenant, source))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Assert
    assert_eq!(names(&body["outstanding"]), vec!["referred"]);
}

#[tokio::test]
async fn talent_summary_lists_only_answered_groups() {
    // Arrange
    let seed = Seed::new();
    let talent = seed.talent("sparse", None);
    seed.answer(talent, "sparse", seed.attitude, "Punctuality", 3, 5);

    let tenant = seed.tenant;
    let address = spawn_app(seed.store).await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/api/tenants/{}/talents/{}/feedback", address, tenant, talent))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let summaries = body.as_array().unwrap();
    assert_eq!(summaries.len(), 1);

    let groups = summaries[0]["groupScores"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["groupName"], "Attitude");
    assert_eq!(summaries[0]["overallScore"], 6.0);
    assert_eq!(summaries[0]["bucket"], "Good");
}

#[tokio::test]
async fn empty_batch_status_is_rejected() {
    // Arrange
    let seed = Seed::new();
    let tenant = seed.tenant;
    let address = spawn_app(seed.store).await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/api/tenants/{}/feedback/dashboard?batchStatus=", address, tenant))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn nil_talent_is_rejected() {
    // Arrange
    let seed = Seed::new();
    let tenant = seed.tenant;
    let address = spawn_app(seed.store).await;

    // Act
    let response = reqwest::Client::new()
        .get(format!("{}/api/tenants/{}/talents/{}/feedback", address, tenant, Uuid::nil()))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}
