//! In-memory backend for page and form tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::client::{Backend, ClientError, ClientResult};
use crate::forms::{SignatureDraft, StoryDraft};
use crate::models::{
    ClimateDataSeries, PetitionSignature, PetitionStats, Story, StoryCategory, StoryFilter,
    StoryStats, VisualizationKind,
};

pub(crate) struct StubBackend {
    climate: Vec<ClimateDataSeries>,
    stories: RefCell<Vec<Story>>,
    signatures: RefCell<Vec<PetitionSignature>>,
    failure: RefCell<Option<ClientError>>,
    calls: Cell<usize>,
}

impl StubBackend {
    pub fn empty() -> Self {
        Self {
            climate: Vec::new(),
            stories: RefCell::new(Vec::new()),
            signatures: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
            calls: Cell::new(0),
        }
    }

    pub fn with_climate(climate: Vec<ClimateDataSeries>) -> Self {
        Self {
            climate,
            ..Self::empty()
        }
    }

    pub fn seeded() -> Self {
        let now = Utc::now();
        let climate = vec![
            ClimateDataSeries::new("CO2 per capita", "emissions", VisualizationKind::Bar)
                .point("Kenya", 0.4)
                .point("USA", 14.7),
            ClimateDataSeries::new("Rainfall anomaly", "rainfall", VisualizationKind::Line)
                .point("2021", -32.0)
                .point("2022", -41.0),
            ClimateDataSeries::new("Sector emissions", "emissions", VisualizationKind::Pie)
                .point("Agriculture", 40.0)
                .point("Energy", 31.0),
        ];
        let stories = vec![
            story("s1", "Turkana", StoryCategory::Drought, true, now),
            story("s2", "Busia", StoryCategory::Floods, true, now - Duration::days(2)),
            story("s3", "Kitui", StoryCategory::Agriculture, false, now - Duration::days(5)),
        ];
        let signatures = (0..12)
            .map(|i| PetitionSignature {
                id: format!("p{}", i),
                name: Some(format!("Signer {}", i)),
                location: "Kisumu".to_string(),
                county: "Kisumu".to_string(),
                comment: None,
                is_anonymous: false,
                created_at: now - Duration::days(11 - i),
            })
            .collect();

        Self {
            climate,
            stories: RefCell::new(stories),
            signatures: RefCell::new(signatures),
            ..Self::empty()
        }
    }

    /// Every following call fails with `error`
    pub fn fail_with(&self, error: ClientError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Number of backend operations invoked
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn enter(&self) -> ClientResult<()> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn story(
    id: &str,
    county: &str,
    category: StoryCategory,
    verified: bool,
    created_at: chrono::DateTime<Utc>,
) -> Story {
    Story {
        id: id.to_string(),
        title: format!("Story from {}", county),
        content: "The rains did not come this year.".to_string(),
        author: "Community member".to_string(),
        location: county.to_string(),
        county: county.to_string(),
        category,
        verified,
        created_at,
    }
}

#[async_trait(?Send)]
impl Backend for StubBackend {
    async fn fetch_all_climate_data(&self) -> ClientResult<Vec<ClimateDataSeries>> {
        self.enter()?;
        Ok(self.climate.clone())
    }

    async fn fetch_climate_data_by_category(
        &self,
        category: &str,
    ) -> ClientResult<Vec<ClimateDataSeries>> {
        self.enter()?;
        Ok(self
            .climate
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_climate_categories(&self) -> ClientResult<Vec<String>> {
        self.enter()?;
        let mut categories: Vec<String> = self.climate.iter().map(|s| s.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn fetch_story_stats(&self) -> ClientResult<StoryStats> {
        self.enter()?;
        Ok(StoryStats::from_stories(&self.stories.borrow()))
    }

    async fn fetch_all_stories(&self, filter: StoryFilter) -> ClientResult<Vec<Story>> {
        self.enter()?;
        Ok(self
            .stories
            .borrow()
            .iter()
            .filter(|s| filter.verified.map_or(true, |v| s.verified == v))
            .cloned()
            .collect())
    }

    async fn submit_story(&self, draft: &StoryDraft) -> ClientResult<Story> {
        self.enter()?;
        let mut stories = self.stories.borrow_mut();
        let created = Story {
            id: format!("s{}", stories.len() + 1),
            title: draft.title.clone(),
            content: draft.content.clone(),
            author: draft.author.clone(),
            location: draft.location.clone(),
            county: draft.county.clone(),
            category: draft.category,
            verified: false,
            created_at: Utc::now(),
        };
        stories.push(created.clone());
        Ok(created)
    }

    async fn fetch_petition_stats(&self) -> ClientResult<PetitionStats> {
        self.enter()?;
        Ok(PetitionStats::from_signatures(
            &self.signatures.borrow(),
            Utc::now(),
        ))
    }

    async fn fetch_signatures(
        &self,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Vec<PetitionSignature>> {
        self.enter()?;
        let skip = (page.max(1) - 1) as usize * page_size as usize;
        Ok(self
            .signatures
            .borrow()
            .iter()
            .rev()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn submit_signature(&self, draft: &SignatureDraft) -> ClientResult<PetitionSignature> {
        self.enter()?;
        let payload = draft.payload();
        let mut signatures = self.signatures.borrow_mut();
        let created = PetitionSignature {
            id: format!("p{}", signatures.len()),
            name: payload.name.map(str::to_string),
            location: payload.location.to_string(),
            county: payload.county.to_string(),
            comment: Some(payload.comment.to_string()).filter(|c| !c.is_empty()),
            is_anonymous: payload.is_anonymous,
            created_at: Utc::now(),
        };
        signatures.push(created.clone());
        Ok(created)
    }
}
