use serde::{Deserialize, Serialize};

/// The four static collections shown by the browse screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub alumni: Vec<AlumniProfile>,
    pub jobs: Vec<JobPosting>,
    pub events: Vec<Event>,
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniProfile {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub graduation_year: i32,
    pub degree: String,
    pub department: String,
    pub email: String,
    pub profile_image: String,
    pub skills: Vec<String>,
    /// Profile similarity to the viewer, 0-100.
    #[serde(rename = "match")]
    pub match_score: u8,
    pub achievements: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    /// Employment type, e.g. "Full-time".
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: String,
    pub applicants: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub fee: String,
    pub description: String,
    pub speakers: Vec<String>,
    pub attendees: u32,
    pub registration_deadline: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supporters: u32,
    pub raised: u64,
    pub goal: u64,
    /// Funded share of `goal`, in percent.
    pub progress: u8,
    pub end_date: String,
}

impl AlumniProfile {
    /// Case-insensitive match of `needle` (already lowercased) against the
    /// searchable text of the profile.
    fn matches(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.title,
            &self.company,
            &self.department,
            &self.degree,
        ]
        .into_iter()
        .chain(self.skills.iter())
        .any(|text| text.to_lowercase().contains(needle))
    }
}

impl Catalog {
    /// Alumni whose profile mentions `query`. A blank query returns everyone.
    pub fn search_alumni(&self, query: &str) -> Vec<&AlumniProfile> {
        let needle = query.trim().to_lowercase();
        self.alumni
            .iter()
            .filter(|profile| needle.is_empty() || profile.matches(&needle))
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} alumni, {} jobs, {} events, {} campaigns",
            self.alumni.len(),
            self.jobs.len(),
            self.events.len(),
            self.campaigns.len()
        )
    }
}
