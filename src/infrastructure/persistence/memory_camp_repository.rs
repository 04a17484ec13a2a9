//! Process-local implementation of the camp repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Camp, Location, Speaker, Talk};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;

/// A talk as stored: the speaker is kept by reference and resolved on read.
#[derive(Clone)]
struct StoredTalk {
    id: i64,
    camp_id: i64,
    speaker_id: i64,
    title: String,
    abstract_text: String,
    level: i32,
}

#[derive(Default)]
struct Store {
    camps: BTreeMap<i64, Camp>,
    talks: BTreeMap<i64, StoredTalk>,
    speakers: BTreeMap<i64, Speaker>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn camp_by_moniker(&self, moniker: &str) -> Option<&Camp> {
        self.camps.values().find(|c| c.moniker == moniker)
    }

    fn resolve(&self, talk: &StoredTalk) -> Result<Talk, AppError> {
        let speaker = self.speakers.get(&talk.speaker_id).cloned().ok_or_else(|| {
            AppError::internal(format!(
                "talk {} references missing speaker {}",
                talk.id, talk.speaker_id
            ))
        })?;

        Ok(Talk {
            id: talk.id,
            camp_id: talk.camp_id,
            title: talk.title.clone(),
            abstract_text: talk.abstract_text.clone(),
            level: talk.level,
            speaker,
        })
    }

    fn talks_of(&self, camp_id: i64) -> Result<Vec<Talk>, AppError> {
        self.talks
            .values()
            .filter(|t| t.camp_id == camp_id)
            .map(|t| self.resolve(t))
            .collect()
    }

    fn load(&self, camp: &Camp, include_talks: bool) -> Result<Camp, AppError> {
        let mut camp = camp.clone();
        camp.talks = if include_talks {
            self.talks_of(camp.id)?
        } else {
            Vec::new()
        };
        Ok(camp)
    }

    fn check_moniker_unique(&self, moniker: &str, own_id: i64) -> Result<(), AppError> {
        match self.camp_by_moniker(moniker) {
            Some(other) if other.id != own_id => Err(AppError::internal(format!(
                "duplicate key value violates unique constraint \"camps_moniker_key\" ({moniker})"
            ))),
            _ => Ok(()),
        }
    }

    fn check_references(&self, talk: &Talk) -> Result<(), AppError> {
        if !self.camps.contains_key(&talk.camp_id) {
            return Err(AppError::internal(format!(
                "talk references missing camp {}",
                talk.camp_id
            )));
        }
        if !self.speakers.contains_key(&talk.speaker.id) {
            return Err(AppError::internal(format!(
                "talk references missing speaker {}",
                talk.speaker.id
            )));
        }
        Ok(())
    }
}

/// In-memory camp store guarded by a mutex.
///
/// Honours the same contract as the PostgreSQL repository, including the
/// unique moniker and the foreign keys of talks, which surface as internal
/// errors. Ids are assigned from one sequence shared by all tables.
#[derive(Default)]
pub struct InMemoryCampRepository {
    store: Mutex<Store>,
}

impl InMemoryCampRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the same sample data as the initial migration:
    /// one camp, two speakers and two talks.
    pub fn seeded() -> Self {
        let mut store = Store::default();

        let shawn = Speaker {
            id: store.next_id(),
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            bio: Some("I'm a speaker".to_string()),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://wildermuth.com".to_string()),
            twitter: Some("shawnwildermuth".to_string()),
            github: Some("shawnwildermuth".to_string()),
            ..Speaker::default()
        };
        let resa = Speaker {
            id: store.next_id(),
            first_name: "Resa".to_string(),
            last_name: "Wildermuth".to_string(),
            bio: Some("I'm a speaker".to_string()),
            company: Some("Wilder Minds LLC".to_string()),
            company_url: Some("http://wilderminds.com".to_string()),
            blog_url: Some("http://wildermuth.com".to_string()),
            twitter: Some("resawildermuth".to_string()),
            github: Some("resawildermuth".to_string()),
            ..Speaker::default()
        };

        let camp_id = store.next_id();
        let camp = Camp {
            id: camp_id,
            moniker: "ATL2018".to_string(),
            name: "Atlanta Code Camp".to_string(),
            event_date: NaiveDate::from_ymd_opt(2018, 10, 18).unwrap_or_default(),
            length: 1,
            location: Location {
                venue_name: Some("Atlanta Convention Center".to_string()),
                address1: Some("123 Main Street".to_string()),
                city_town: Some("Atlanta".to_string()),
                state_province: Some("GA".to_string()),
                postal_code: Some("12345".to_string()),
                country: Some("USA".to_string()),
                ..Location::default()
            },
            talks: Vec::new(),
        };

        for (title, abstract_text, level, speaker_id) in [
            (
                "Entity Framework From Scratch",
                "Working with Entity Framework from the ground up.",
                100,
                shawn.id,
            ),
            (
                "Writing Sample Data Made Easy",
                "Thinking of good sample data examples is tiring.",
                200,
                resa.id,
            ),
        ] {
            let id = store.next_id();
            store.talks.insert(
                id,
                StoredTalk {
                    id,
                    camp_id,
                    speaker_id,
                    title: title.to_string(),
                    abstract_text: abstract_text.to_string(),
                    level,
                },
            );
        }

        store.speakers.insert(shawn.id, shawn);
        store.speakers.insert(resa.id, resa);
        store.camps.insert(camp_id, camp);

        Self {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, AppError> {
        self.store
            .lock()
            .map_err(|_| AppError::internal("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn ping(&self) -> Result<(), AppError> {
        self.store().map(|_| ())
    }

    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let store = self.store()?;
        store
            .camps
            .values()
            .map(|c| store.load(c, include_talks))
            .collect()
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        let store = self.store()?;
        store
            .camp_by_moniker(moniker)
            .map(|c| store.load(c, include_talks))
            .transpose()
    }

    async fn find_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let store = self.store()?;
        let mut camps = store
            .camps
            .values()
            .filter(|c| c.is_held_on(date))
            .map(|c| store.load(c, include_talks))
            .collect::<Result<Vec<_>, _>>()?;
        camps.sort_by_key(|c| (c.event_date, c.id));
        Ok(camps)
    }

    async fn insert_camp(&self, camp: &Camp) -> Result<Option<Camp>, AppError> {
        let mut store = self.store()?;
        store.check_moniker_unique(&camp.moniker, 0)?;

        let created = Camp {
            id: store.next_id(),
            talks: Vec::new(),
            ..camp.clone()
        };
        store.camps.insert(created.id, created.clone());
        Ok(Some(created))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let mut store = self.store()?;
        if !store.camps.contains_key(&camp.id) {
            return Ok(false);
        }
        store.check_moniker_unique(&camp.moniker, camp.id)?;

        let stored = Camp {
            talks: Vec::new(),
            ..camp.clone()
        };
        store.camps.insert(camp.id, stored);
        Ok(true)
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        let mut store = self.store()?;
        if store.camps.remove(&camp_id).is_none() {
            return Ok(false);
        }
        store.talks.retain(|_, t| t.camp_id != camp_id);
        Ok(true)
    }

    async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        let store = self.store()?;
        match store.camp_by_moniker(moniker) {
            Some(camp) => store.talks_of(camp.id),
            None => Ok(Vec::new()),
        }
    }

    async fn find_talk(&self, moniker: &str, talk_id: i64) -> Result<Option<Talk>, AppError> {
        let store = self.store()?;
        let Some(camp) = store.camp_by_moniker(moniker) else {
            return Ok(None);
        };
        store
            .talks
            .get(&talk_id)
            .filter(|t| t.camp_id == camp.id)
            .map(|t| store.resolve(t))
            .transpose()
    }

    async fn insert_talk(&self, talk: &Talk) -> Result<Option<Talk>, AppError> {
        let mut store = self.store()?;
        store.check_references(talk)?;

        let id = store.next_id();
        store.talks.insert(
            id,
            StoredTalk {
                id,
                camp_id: talk.camp_id,
                speaker_id: talk.speaker.id,
                title: talk.title.clone(),
                abstract_text: talk.abstract_text.clone(),
                level: talk.level,
            },
        );
        Ok(Some(Talk {
            id,
            ..talk.clone()
        }))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let mut store = self.store()?;
        if !store.talks.contains_key(&talk.id) {
            return Ok(false);
        }
        store.check_references(talk)?;

        if let Some(stored) = store.talks.get_mut(&talk.id) {
            stored.speaker_id = talk.speaker.id;
            stored.title = talk.title.clone();
            stored.abstract_text = talk.abstract_text.clone();
            stored.level = talk.level;
        }
        Ok(true)
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        Ok(self.store()?.talks.remove(&talk_id).is_some())
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        Ok(self.store()?.speakers.values().cloned().collect())
    }

    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        Ok(self.store()?.speakers.get(&speaker_id).cloned())
    }

    async fn insert_speaker(&self, speaker: &Speaker) -> Result<Option<Speaker>, AppError> {
        let mut store = self.store()?;
        let created = Speaker {
            id: store.next_id(),
            ..speaker.clone()
        };
        store.speakers.insert(created.id, created.clone());
        Ok(Some(created))
    }
}
