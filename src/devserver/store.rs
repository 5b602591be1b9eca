//! In-memory collections behind the devserver

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::error::ApiError;
use crate::forms::{Draft, SignatureDraft, StoryDraft};
use crate::models::{
    ClimateDataSeries, PetitionSignature, PetitionStats, Story, StoryCategory, StoryStats,
    VisualizationKind,
};

/// Message returned when an email signs twice
pub const ALREADY_SIGNED: &str = "You have already signed this petition";

/// Message returned when an email resubmits a story with the same title
pub const ALREADY_SHARED: &str = "You have already shared this story";

/// A story together with its submitter's email, lowercased. The email is
/// never returned; it only keys duplicate submissions.
#[derive(Debug, Clone)]
struct StoredStory {
    story: Story,
    email: String,
}

#[derive(Debug, Clone)]
struct StoredSignature {
    signature: PetitionSignature,
    email: String,
}

#[derive(Debug, Default)]
pub struct Store {
    climate: Vec<ClimateDataSeries>,
    stories: Vec<StoredStory>,
    signatures: Vec<StoredSignature>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with fixture climate series, published stories and a few signatures
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut store = Self {
            climate: seed_climate(),
            ..Self::default()
        };

        for (i, (title, content, author, location, county, category)) in
            SEED_STORIES.iter().enumerate()
        {
            store.stories.push(StoredStory {
                story: Story {
                    id: new_id(),
                    title: title.to_string(),
                    content: content.to_string(),
                    author: author.to_string(),
                    location: location.to_string(),
                    county: county.to_string(),
                    category: *category,
                    verified: true,
                    created_at: now - Duration::days(3 * (i as i64 + 1)),
                },
                email: String::new(),
            });
        }

        for (i, (name, county)) in SEED_SIGNERS.iter().enumerate() {
            store.signatures.push(StoredSignature {
                signature: PetitionSignature {
                    id: new_id(),
                    name: name.map(str::to_string),
                    location: county.to_string(),
                    county: county.to_string(),
                    comment: None,
                    is_anonymous: name.is_none(),
                    created_at: now - Duration::days(2 * i as i64 + 1),
                },
                email: format!("seed{}@example.org", i),
            });
        }

        store
    }

    /// All series, or only those in `category`
    pub fn climate(&self, category: Option<&str>) -> Vec<ClimateDataSeries> {
        self.climate
            .iter()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for series in &self.climate {
            if !categories.contains(&series.category) {
                categories.push(series.category.clone());
            }
        }
        categories
    }

    pub fn add_climate(&mut self, series: ClimateDataSeries) {
        self.climate.push(series);
    }

    /// Stories newest first, optionally filtered by moderation status
    pub fn stories(&self, verified: Option<bool>) -> Vec<Story> {
        let mut stories: Vec<Story> = self
            .stories
            .iter()
            .map(|s| &s.story)
            .filter(|s| verified.map_or(true, |v| s.verified == v))
            .cloned()
            .collect();
        stories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        stories
    }

    pub fn story_stats(&self) -> StoryStats {
        let stories: Vec<Story> = self.stories.iter().map(|s| s.story.clone()).collect();
        StoryStats::from_stories(&stories)
    }

    /// Validate and record a story. New stories wait for moderation.
    ///
    /// The same email cannot submit two stories with the same title.
    pub fn add_story(&mut self, draft: &StoryDraft) -> Result<Story, ApiError> {
        draft
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let email = draft.email.trim().to_ascii_lowercase();
        let title = draft.title.trim();
        if self
            .stories
            .iter()
            .any(|s| s.email == email && s.story.title.eq_ignore_ascii_case(title))
        {
            return Err(ApiError::Validation(ALREADY_SHARED.to_string()));
        }

        let story = Story {
            id: new_id(),
            title: title.to_string(),
            content: draft.content.trim().to_string(),
            author: draft.author.trim().to_string(),
            location: draft.location.trim().to_string(),
            county: draft.county.clone(),
            category: draft.category,
            verified: false,
            created_at: Utc::now(),
        };

        self.stories.push(StoredStory {
            story: story.clone(),
            email,
        });
        Ok(story)
    }

    /// Mark a story as published
    pub fn verify_story(&mut self, id: &str) -> Result<Story, ApiError> {
        let stored = self
            .stories
            .iter_mut()
            .find(|s| s.story.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Story {}", id)))?;
        stored.story.verified = true;
        Ok(stored.story.clone())
    }

    /// One page of signatures, newest first. Pages start at 1.
    pub fn signatures(&self, page: u32, limit: u32) -> Vec<PetitionSignature> {
        let mut signatures: Vec<&PetitionSignature> =
            self.signatures.iter().map(|s| &s.signature).collect();
        signatures.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = (page.max(1) as usize - 1) * limit as usize;
        signatures
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    pub fn petition_stats(&self, now: DateTime<Utc>) -> PetitionStats {
        let signatures: Vec<PetitionSignature> =
            self.signatures.iter().map(|s| s.signature.clone()).collect();
        PetitionStats::from_signatures(&signatures, now)
    }

    /// Validate and record a signature; one signature per email
    pub fn sign(&mut self, draft: &SignatureDraft) -> Result<PetitionSignature, ApiError> {
        draft
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let email = draft.email.trim().to_ascii_lowercase();
        if self.signatures.iter().any(|s| s.email == email) {
            return Err(ApiError::Validation(ALREADY_SIGNED.to_string()));
        }

        let payload = draft.payload();
        let signature = PetitionSignature {
            id: new_id(),
            name: payload.name.map(|n| n.trim().to_string()),
            location: payload.location.trim().to_string(),
            county: payload.county.to_string(),
            comment: Some(payload.comment.trim().to_string()).filter(|c| !c.is_empty()),
            is_anonymous: payload.is_anonymous,
            created_at: Utc::now(),
        };

        self.signatures.push(StoredSignature {
            signature: signature.clone(),
            email,
        });
        Ok(signature)
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

const FIXTURE_SOURCE: &str = "Fixture data for local development";

fn seed_climate() -> Vec<ClimateDataSeries> {
    vec![
        ClimateDataSeries::new(
            "CO2 Emissions per Capita (tons)",
            "emissions",
            VisualizationKind::Bar,
        )
        .description("Kenya emits 36x less CO2 per person than the United States")
        .source(FIXTURE_SOURCE)
        .point("Kenya", 0.4)
        .point("USA", 14.7)
        .point("China", 8.2)
        .point("Germany", 8.9)
        .point("South Africa", 6.9)
        .point("Global Avg", 4.7),
        ClimateDataSeries::new("Climate Vulnerability Score", "vulnerability", VisualizationKind::Radar)
            .description("Exposure scores on a 0-10 scale")
            .source(FIXTURE_SOURCE)
            .point("Drought Risk", 8.2)
            .point("Flood Risk", 7.8)
            .point("Food Security", 7.5)
            .point("Water Stress", 8.0)
            .point("Health Impact", 6.9),
        ClimateDataSeries::new("Share of Global Emissions (%)", "emissions", VisualizationKind::Pie)
            .description("Kenya contributes less than 0.1% of global greenhouse gas emissions")
            .source(FIXTURE_SOURCE)
            .colored_point("Kenya", 0.1, "#2E8B57")
            .colored_point("Rest of the world", 99.9, "#1A535C"),
        ClimateDataSeries::new("Electricity Generation Mix (%)", "energy", VisualizationKind::Doughnut)
            .description("Renewable sources dominate Kenya's grid")
            .source(FIXTURE_SOURCE)
            .point("Geothermal", 45.0)
            .point("Hydro", 21.0)
            .point("Wind", 16.0)
            .point("Solar", 4.0)
            .point("Thermal", 14.0),
        ClimateDataSeries::new("People Facing Drought (millions)", "impacts", VisualizationKind::Line)
            .description("Population in drought-affected counties")
            .source(FIXTURE_SOURCE)
            .point("2019", 1.1)
            .point("2020", 1.4)
            .point("2021", 2.1)
            .point("2022", 4.3),
    ]
}

type SeedStory = (&'static str, &'static str, &'static str, &'static str, &'static str, StoryCategory);

const SEED_STORIES: [SeedStory; 3] = [
    (
        "Our goats did not survive the dry season",
        "Four rainy seasons have failed in a row. We walked further every week to find \
         water and pasture, and by March most of the herd was gone.",
        "Ekai Lokwawi",
        "Lodwar",
        "Turkana",
        StoryCategory::Drought,
    ),
    (
        "The river took the school",
        "When the Nzoia burst its banks the classrooms flooded for three weeks. The \
         children now learn under the trees near the market.",
        "Akinyi Otieno",
        "Budalangi",
        "Busia",
        StoryCategory::Floods,
    ),
    (
        "Switching to drought-tolerant sorghum",
        "After two failed maize harvests our women's group planted sorghum and green \
         grams. The yields are smaller but they come every season.",
        "Mwikali Musyoka",
        "Mwingi",
        "Kitui",
        StoryCategory::Agriculture,
    ),
];

const SEED_SIGNERS: [(Option<&str>, &str); 4] = [
    (Some("Wanjiru Kamau"), "Nairobi"),
    (None, "Mombasa"),
    (Some("Hassan Abdi"), "Garissa"),
    (Some("Chebet Kiprop"), "Uasin Gishu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> SignatureDraft {
        SignatureDraft {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            location: "Nairobi".to_string(),
            county: "Nairobi".to_string(),
            comment: String::new(),
            is_anonymous: false,
        }
    }

    #[test]
    fn test_seeded_categories_first_seen_order() {
        let store = Store::seeded();
        assert_eq!(
            store.categories(),
            vec!["emissions", "vulnerability", "energy", "impacts"]
        );
        assert_eq!(store.climate(Some("emissions")).len(), 2);
        assert_eq!(store.climate(None).len(), 5);
    }

    #[test]
    fn test_sign_once_per_email() {
        let mut store = Store::new();
        store.sign(&jane()).unwrap();

        let mut again = jane();
        again.email = "JANE@x.com".to_string();
        let err = store.sign(&again).unwrap_err();
        assert_eq!(err.to_string(), ALREADY_SIGNED);
        assert_eq!(store.petition_stats(Utc::now()).total_signatures, 1);
    }

    #[test]
    fn test_sign_rejects_invalid_draft() {
        let mut store = Store::new();
        let mut draft = jane();
        draft.county.clear();
        assert!(matches!(store.sign(&draft), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_new_story_waits_for_moderation() {
        let mut store = Store::seeded();
        let draft = StoryDraft {
            title: "Dust storms".to_string(),
            content: "The wind took the topsoil.".to_string(),
            author: "Abdi".to_string(),
            email: "abdi@example.org".to_string(),
            location: "Moyale".to_string(),
            county: "Marsabit".to_string(),
            category: StoryCategory::Livelihood,
            consent: true,
        };

        let story = store.add_story(&draft).unwrap();
        assert!(!story.verified);
        assert_eq!(store.stories(Some(true)).len(), 3);
        assert_eq!(store.story_stats().total_stories, 4);

        store.verify_story(&story.id).unwrap();
        assert_eq!(store.stories(Some(true)).len(), 4);
    }

    #[test]
    fn test_same_story_once_per_email() {
        let mut store = Store::new();
        let mut draft = StoryDraft {
            title: "Dust storms".to_string(),
            content: "The wind took the topsoil.".to_string(),
            author: "Abdi".to_string(),
            email: "abdi@example.org".to_string(),
            location: "Moyale".to_string(),
            county: "Marsabit".to_string(),
            category: StoryCategory::Livelihood,
            consent: true,
        };
        store.add_story(&draft).unwrap();

        draft.email = "ABDI@example.org ".to_string();
        draft.title = "dust storms".to_string();
        let err = store.add_story(&draft).unwrap_err();
        assert_eq!(err.to_string(), ALREADY_SHARED);

        draft.title = "Dust storms, again".to_string();
        store.add_story(&draft).unwrap();

        draft.email = "halima@example.org".to_string();
        draft.title = "Dust storms".to_string();
        store.add_story(&draft).unwrap();
        assert_eq!(store.story_stats().total_stories, 3);
    }

    #[test]
    fn test_signature_pages() {
        let store = Store::seeded();
        let first = store.signatures(1, 3);
        assert_eq!(first.len(), 3);
        assert!(first[0].created_at >= first[1].created_at);
        assert_eq!(store.signatures(2, 3).len(), 1);
        assert!(store.signatures(3, 3).is_empty());
    }
}
