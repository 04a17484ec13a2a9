//! PostgreSQL implementation of the camp repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Camp, Location, Speaker, Talk};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;

const CAMP_COLUMNS: &str = r#"
    id, moniker, name, event_date, length,
    venue_name, address1, address2, address3,
    city_town, state_province, postal_code, country
"#;

const TALK_SELECT: &str = r#"
    SELECT t.id, t.camp_id, t.title, t.abstract_text, t.level,
           s.id AS speaker_id, s.first_name, s.last_name, s.middle_name, s.bio,
           s.company, s.company_url, s.blog_url, s.twitter, s.github
    FROM talks t
    JOIN speakers s ON s.id = t.speaker_id
"#;

const SPEAKER_COLUMNS: &str = r#"
    id, first_name, last_name, middle_name, bio,
    company, company_url, blog_url, twitter, github
"#;

#[derive(FromRow)]
struct CampRow {
    id: i64,
    moniker: String,
    name: String,
    event_date: NaiveDate,
    length: i32,
    venue_name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    city_town: Option<String>,
    state_province: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl From<CampRow> for Camp {
    fn from(r: CampRow) -> Self {
        Camp {
            id: r.id,
            moniker: r.moniker,
            name: r.name,
            event_date: r.event_date,
            length: r.length,
            location: Location {
                venue_name: r.venue_name,
                address1: r.address1,
                address2: r.address2,
                address3: r.address3,
                city_town: r.city_town,
                state_province: r.state_province,
                postal_code: r.postal_code,
                country: r.country,
            },
            talks: Vec::new(),
        }
    }
}

#[derive(FromRow)]
struct SpeakerRow {
    id: i64,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    bio: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    github: Option<String>,
}

impl From<SpeakerRow> for Speaker {
    fn from(r: SpeakerRow) -> Self {
        Speaker {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            bio: r.bio,
            company: r.company,
            company_url: r.company_url,
            blog_url: r.blog_url,
            twitter: r.twitter,
            github: r.github,
        }
    }
}

/// A talk joined with its speaker.
#[derive(FromRow)]
struct TalkRow {
    id: i64,
    camp_id: i64,
    title: String,
    abstract_text: String,
    level: i32,
    speaker_id: i64,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    bio: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    blog_url: Option<String>,
    twitter: Option<String>,
    github: Option<String>,
}

impl From<TalkRow> for Talk {
    fn from(r: TalkRow) -> Self {
        Talk {
            id: r.id,
            camp_id: r.camp_id,
            title: r.title,
            abstract_text: r.abstract_text,
            level: r.level,
            speaker: Speaker {
                id: r.speaker_id,
                first_name: r.first_name,
                last_name: r.last_name,
                middle_name: r.middle_name,
                bio: r.bio,
                company: r.company,
                company_url: r.company_url,
                blog_url: r.blog_url,
                twitter: r.twitter,
                github: r.github,
            },
        }
    }
}

/// PostgreSQL repository for camps, their talks and speakers.
///
/// Queries are checked at runtime (`query_as` + [`FromRow`]) so the crate
/// builds without a live database. Talks for a batch of camps are loaded with
/// a single `ANY($1)` query and grouped in memory.
pub struct PgCampRepository {
    pool: Arc<PgPool>,
}

impl PgCampRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches talks to the given camps when requested.
    async fn with_talks(
        &self,
        rows: Vec<CampRow>,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let mut camps: Vec<Camp> = rows.into_iter().map(Camp::from).collect();
        if !include_talks || camps.is_empty() {
            return Ok(camps);
        }

        let ids: Vec<i64> = camps.iter().map(|c| c.id).collect();
        let talks = sqlx::query_as::<_, TalkRow>(&format!(
            "{TALK_SELECT} WHERE t.camp_id = ANY($1) ORDER BY t.id"
        ))
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_camp: HashMap<i64, Vec<Talk>> = HashMap::new();
        for row in talks {
            by_camp.entry(row.camp_id).or_default().push(row.into());
        }
        for camp in &mut camps {
            camp.talks = by_camp.remove(&camp.id).unwrap_or_default();
        }

        Ok(camps)
    }
}

#[async_trait]
impl CampRepository for PgCampRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        let rows = sqlx::query_as::<_, CampRow>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_talks(rows, include_talks).await
    }

    async fn find_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, AppError> {
        let row = sqlx::query_as::<_, CampRow>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps WHERE moniker = $1"
        ))
        .bind(moniker)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let rows = row.into_iter().collect();
        Ok(self.with_talks(rows, include_talks).await?.pop())
    }

    async fn find_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        // date + integer is a date; the span is [event_date, event_date + length).
        let rows = sqlx::query_as::<_, CampRow>(&format!(
            r#"
            SELECT {CAMP_COLUMNS}
            FROM camps
            WHERE event_date <= $1 AND $1 < event_date + length
            ORDER BY event_date, id
            "#
        ))
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_talks(rows, include_talks).await
    }

    async fn insert_camp(&self, camp: &Camp) -> Result<Option<Camp>, AppError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO camps (moniker, name, event_date, length,
                               venue_name, address1, address2, address3,
                               city_town, state_province, postal_code, country)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(&camp.moniker)
        .bind(&camp.name)
        .bind(camp.event_date)
        .bind(camp.length)
        .bind(camp.location.venue_name.as_deref())
        .bind(camp.location.address1.as_deref())
        .bind(camp.location.address2.as_deref())
        .bind(camp.location.address3.as_deref())
        .bind(camp.location.city_town.as_deref())
        .bind(camp.location.state_province.as_deref())
        .bind(camp.location.postal_code.as_deref())
        .bind(camp.location.country.as_deref())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id.map(|id| Camp {
            id,
            talks: Vec::new(),
            ..camp.clone()
        }))
    }

    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE camps SET
                moniker        = $2,
                name           = $3,
                event_date     = $4,
                length         = $5,
                venue_name     = $6,
                address1       = $7,
                address2       = $8,
                address3       = $9,
                city_town      = $10,
                state_province = $11,
                postal_code    = $12,
                country        = $13
            WHERE id = $1
            "#,
        )
        .bind(camp.id)
        .bind(&camp.moniker)
        .bind(&camp.name)
        .bind(camp.event_date)
        .bind(camp.length)
        .bind(camp.location.venue_name.as_deref())
        .bind(camp.location.address1.as_deref())
        .bind(camp.location.address2.as_deref())
        .bind(camp.location.address3.as_deref())
        .bind(camp.location.city_town.as_deref())
        .bind(camp.location.state_province.as_deref())
        .bind(camp.location.postal_code.as_deref())
        .bind(camp.location.country.as_deref())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM talks WHERE camp_id = $1")
            .bind(camp_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM camps WHERE id = $1")
            .bind(camp_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        let rows = sqlx::query_as::<_, TalkRow>(&format!(
            r#"
            {TALK_SELECT}
            JOIN camps c ON c.id = t.camp_id
            WHERE c.moniker = $1
            ORDER BY t.id
            "#
        ))
        .bind(moniker)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Talk::from).collect())
    }

    async fn find_talk(&self, moniker: &str, talk_id: i64) -> Result<Option<Talk>, AppError> {
        let row = sqlx::query_as::<_, TalkRow>(&format!(
            r#"
            {TALK_SELECT}
            JOIN camps c ON c.id = t.camp_id
            WHERE c.moniker = $1 AND t.id = $2
            "#
        ))
        .bind(moniker)
        .bind(talk_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Talk::from))
    }

    async fn insert_talk(&self, talk: &Talk) -> Result<Option<Talk>, AppError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO talks (camp_id, speaker_id, title, abstract_text, level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(talk.camp_id)
        .bind(talk.speaker.id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id.map(|id| Talk {
            id,
            ..talk.clone()
        }))
    }

    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE talks SET
                speaker_id    = $2,
                title         = $3,
                abstract_text = $4,
                level         = $5
            WHERE id = $1
            "#,
        )
        .bind(talk.id)
        .bind(talk.speaker.id)
        .bind(&talk.title)
        .bind(&talk.abstract_text)
        .bind(talk.level)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM talks WHERE id = $1")
            .bind(talk_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let rows = sqlx::query_as::<_, SpeakerRow>(&format!(
            "SELECT {SPEAKER_COLUMNS} FROM speakers ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Speaker::from).collect())
    }

    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        let row = sqlx::query_as::<_, SpeakerRow>(&format!(
            "SELECT {SPEAKER_COLUMNS} FROM speakers WHERE id = $1"
        ))
        .bind(speaker_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Speaker::from))
    }

    async fn insert_speaker(&self, speaker: &Speaker) -> Result<Option<Speaker>, AppError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO speakers (first_name, last_name, middle_name, bio,
                                  company, company_url, blog_url, twitter, github)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&speaker.first_name)
        .bind(&speaker.last_name)
        .bind(speaker.middle_name.as_deref())
        .bind(speaker.bio.as_deref())
        .bind(speaker.company.as_deref())
        .bind(speaker.company_url.as_deref())
        .bind(speaker.blog_url.as_deref())
        .bind(speaker.twitter.as_deref())
        .bind(speaker.github.as_deref())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id.map(|id| Speaker {
            id,
            ..speaker.clone()
        }))
    }
}
