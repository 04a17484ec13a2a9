#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use code_camp::api::versioning::ApiVersion;
use code_camp::config::{Config, SharedConfig};
use code_camp::domain::entities::{Camp, Speaker, Talk};
use code_camp::domain::repositories::CampRepository;
use code_camp::error::AppError;
use code_camp::infrastructure::persistence::InMemoryCampRepository;
use code_camp::routes::app_router;
use code_camp::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/code_camp_test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        default_api_version: ApiVersion::V1_1,
        db_max_connections: 5,
        db_connect_timeout: 5,
        db_idle_timeout: 60,
        db_max_lifetime: 600,
    }
}

/// Configuration holder whose reload yields `test_config()` again.
pub fn shared_config() -> SharedConfig {
    SharedConfig::new(test_config(), || Ok(test_config()))
}

pub fn create_test_server(repository: Arc<dyn CampRepository>, config: SharedConfig) -> TestServer {
    let state = AppState::new(repository, config);
    TestServer::new(app_router(state)).unwrap()
}

/// Server over the seeded in-memory store: camp `ATL2018` with two talks,
/// speakers Shawn and Resa.
pub fn make_server() -> TestServer {
    create_test_server(Arc::new(InMemoryCampRepository::seeded()), shared_config())
}

pub fn make_faulty_server(fault: Fault) -> TestServer {
    create_test_server(
        Arc::new(FaultyRepository::new(fault)),
        shared_config(),
    )
}

pub fn camp_body(moniker: &str) -> Value {
    json!({
        "Name": "San Diego Code Camp",
        "Moniker": moniker,
        "EventDate": "2019-03-09",
        "Length": 2,
        "VenueName": "San Diego Convention Center",
        "Address1": "111 W Harbor Dr",
        "CityTown": "San Diego",
        "StateProvince": "CA",
        "PostalCode": "92101",
        "Country": "USA"
    })
}

pub fn talk_body(title: &str, speaker_id: Option<i64>) -> Value {
    let mut body = json!({
        "Title": title,
        "Abstract": "A long enough abstract for the validator to accept.",
        "Level": 200
    });
    if let Some(id) = speaker_id {
        body["Speaker"] = json!({ "SpeakerId": id });
    }
    body
}

/// Looks up a seeded speaker id by first name.
pub async fn speaker_id(server: &TestServer, first_name: &str) -> i64 {
    let speakers = server.get("/api/speakers").await.json::<Value>();
    speakers
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["FirstName"] == first_name)
        .and_then(|s| s["SpeakerId"].as_i64())
        .unwrap()
}

/// Ids of the talks of a camp, in order.
pub async fn talk_ids(server: &TestServer, moniker: &str) -> Vec<i64> {
    let talks = server
        .get(&format!("/api/camps/{moniker}/talks"))
        .await
        .json::<Value>();
    talks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["TalkId"].as_i64().unwrap())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Every call fails as if the database were unreachable.
    StoreDown,
    /// Reads work; writes go through but report that nothing was saved.
    NothingSaved,
}

/// Seeded in-memory store with an injected fault.
pub struct FaultyRepository {
    inner: InMemoryCampRepository,
    fault: Fault,
}

impl FaultyRepository {
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: InMemoryCampRepository::seeded(),
            fault,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        match self.fault {
            Fault::StoreDown => Err(AppError::internal("connection refused")),
            Fault::NothingSaved => Ok(()),
        }
    }

    fn saves(&self) -> bool {
        self.fault != Fault::NothingSaved
    }
}

#[async_trait]
impl CampRepository for FaultyRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()?;
        self.inner.ping().await
    }

    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        self.check()?;
        self.inner.list_camps(include_talks).await
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        self.check()?;
        self.inner.find_camp(moniker, include_talks).await
    }

    async fn find_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        self.check()?;
        self.inner.find_camps_by_date(date, include_talks).await
    }

    async fn insert_camp(&self, camp: &Camp) -> Result<Option<Camp>, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(None);
        }
        self.inner.insert_camp(camp).await
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(false);
        }
        self.inner.update_camp(camp).await
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(false);
        }
        self.inner.delete_camp(camp_id).await
    }

    async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        self.check()?;
        self.inner.list_talks(moniker).await
    }

    async fn find_talk(&self, moniker: &str, talk_id: i64) -> Result<Option<Talk>, AppError> {
        self.check()?;
        self.inner.find_talk(moniker, talk_id).await
    }

    async fn insert_talk(&self, talk: &Talk) -> Result<Option<Talk>, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(None);
        }
        self.inner.insert_talk(talk).await
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(false);
        }
        self.inner.update_talk(talk).await
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(false);
        }
        self.inner.delete_talk(talk_id).await
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        self.check()?;
        self.inner.list_speakers().await
    }

    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        self.check()?;
        self.inner.find_speaker(speaker_id).await
    }

    async fn insert_speaker(&self, speaker: &Speaker) -> Result<Option<Speaker>, AppError> {
        self.check()?;
        if !self.saves() {
            return Ok(None);
        }
        self.inner.insert_speaker(speaker).await
    }
}
