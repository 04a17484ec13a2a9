//! Translation between domain entities and transfer models.
//!
//! All functions are pure. Mapping is split in two kinds:
//!
//! - **Structural** - scalar fields, plus flattening a camp's [`Location`]
//!   onto `CampModel` and rebuilding it on the way back.
//! - **Relationships** - a talk's camp and speaker. These are never taken
//!   from a transfer model here; the services look them up and attach them as
//!   a separate step, so a payload cannot silently re-point a talk.

use crate::api::dto::{CampModel, SpeakerModel, TalkModel};
use crate::domain::entities::{Camp, Location, Speaker, Talk, TalkFields};

/// Camp → model, flattening the location. Loaded talks are mapped too.
pub fn camp_to_model(camp: &Camp) -> CampModel {
    let Location {
        venue_name,
        address1,
        address2,
        address3,
        city_town,
        state_province,
        postal_code,
        country,
    } = camp.location.clone();

    CampModel {
        name: camp.name.clone(),
        moniker: camp.moniker.clone(),
        event_date: camp.event_date,
        length: camp.length,
        venue_name,
        address1,
        address2,
        address3,
        city_town,
        state_province,
        postal_code,
        country,
        talks: camp.talks.iter().map(talk_to_model).collect(),
    }
}

/// Rebuilds the nested location from a model's flat venue fields.
pub fn location_from_model(model: &CampModel) -> Location {
    Location {
        venue_name: model.venue_name.clone(),
        address1: model.address1.clone(),
        address2: model.address2.clone(),
        address3: model.address3.clone(),
        city_town: model.city_town.clone(),
        state_province: model.state_province.clone(),
        postal_code: model.postal_code.clone(),
        country: model.country.clone(),
    }
}

/// Model → new, unsaved camp (id `0`, no talks).
pub fn camp_from_model(model: &CampModel) -> Camp {
    Camp {
        id: 0,
        moniker: model.moniker.clone(),
        name: model.name.clone(),
        event_date: model.event_date,
        length: model.length,
        location: location_from_model(model),
        talks: Vec::new(),
    }
}

/// Replaces the structural fields of an existing camp with the model's.
///
/// The id and the talks collection are kept. The location is replaced as a
/// whole: a venue field missing from the model is cleared.
pub fn merge_camp(model: &CampModel, camp: &mut Camp) {
    camp.moniker = model.moniker.clone();
    camp.name = model.name.clone();
    camp.event_date = model.event_date;
    camp.length = model.length;
    camp.location = location_from_model(model);
}

/// Talk → model with the speaker embedded.
pub fn talk_to_model(talk: &Talk) -> TalkModel {
    TalkModel {
        talk_id: talk.id,
        title: talk.title.clone(),
        abstract_text: talk.abstract_text.clone(),
        level: talk.level,
        speaker: Some(speaker_to_model(&talk.speaker)),
    }
}

impl From<&TalkModel> for TalkFields {
    fn from(model: &TalkModel) -> Self {
        Self {
            title: model.title.clone(),
            abstract_text: model.abstract_text.clone(),
            level: model.level,
        }
    }
}

/// Copies the model's scalar fields onto an existing talk.
///
/// `id`, `camp_id` and `speaker` are left alone.
pub fn merge_talk(model: &TalkModel, talk: &mut Talk) {
    talk.title = model.title.clone();
    talk.abstract_text = model.abstract_text.clone();
    talk.level = model.level;
}

pub fn speaker_to_model(speaker: &Speaker) -> SpeakerModel {
    SpeakerModel {
        speaker_id: speaker.id,
        first_name: speaker.first_name.clone(),
        last_name: speaker.last_name.clone(),
        middle_name: speaker.middle_name.clone(),
        bio: speaker.bio.clone(),
        company: speaker.company.clone(),
        company_url: speaker.company_url.clone(),
        blog_url: speaker.blog_url.clone(),
        twitter: speaker.twitter.clone(),
        github: speaker.github.clone(),
    }
}

pub fn speaker_from_model(model: SpeakerModel) -> Speaker {
    Speaker {
        id: model.speaker_id,
        first_name: model.first_name,
        last_name: model.last_name,
        middle_name: model.middle_name,
        bio: model.bio,
        company: model.company,
        company_url: model.company_url,
        blog_url: model.blog_url,
        twitter: model.twitter,
        github: model.github,
    }
}
