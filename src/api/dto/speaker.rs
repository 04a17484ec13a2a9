//! Speaker transfer model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of a speaker.
///
/// Every member is optional on input so that a talk can reference a speaker
/// with nothing but `{"SpeakerId": 3}`. Creating a speaker through
/// `POST /api/speakers` validates the name fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpeakerModel {
    pub speaker_id: i64,

    #[validate(length(min = 1, max = 100, message = "FirstName is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "LastName is required"))]
    pub last_name: String,

    pub middle_name: Option<String>,

    #[validate(length(max = 4000))]
    pub bio: Option<String>,

    pub company: Option<String>,

    #[validate(url)]
    pub company_url: Option<String>,

    #[validate(url)]
    pub blog_url: Option<String>,

    pub twitter: Option<String>,

    #[serde(rename = "GitHub")]
    pub github: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_only_payload() {
        let model: SpeakerModel = serde_json::from_value(json!({ "SpeakerId": 3 })).unwrap();

        assert_eq!(model.speaker_id, 3);
        assert!(model.first_name.is_empty());
        assert!(model.github.is_none());
    }

    #[test]
    fn test_serializes_pascal_case_members() {
        let model = SpeakerModel {
            speaker_id: 1,
            first_name: "Shawn".to_string(),
            last_name: "Wildermuth".to_string(),
            github: Some("shawnwildermuth".to_string()),
            ..SpeakerModel::default()
        };

        let value = serde_json::to_value(&model).unwrap();

        assert_eq!(value["SpeakerId"], 1);
        assert_eq!(value["FirstName"], "Shawn");
        assert_eq!(value["GitHub"], "shawnwildermuth");
        assert!(value.get("Github").is_none());
    }

    #[test]
    fn test_validation_requires_names() {
        let model = SpeakerModel {
            first_name: "Ada".to_string(),
            ..SpeakerModel::default()
        };

        let errors = model.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        let model = SpeakerModel {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            blog_url: Some("not a url".to_string()),
            ..SpeakerModel::default()
        };

        assert!(model.validate().is_err());
    }
}
