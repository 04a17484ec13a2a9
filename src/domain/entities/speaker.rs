//! Speaker entity.

/// A person presenting one or more talks.
///
/// Speakers are shared: the same speaker may be referenced by talks across
/// many camps, so deleting a talk or a camp never deletes its speaker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl Speaker {
    /// Full display name, including the middle name when present.
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref().filter(|m| !m.is_empty()) {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
