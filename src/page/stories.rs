//! Stories page: moderated stories, their stats and the share-a-story form

use async_trait::async_trait;
use futures_util::try_join;
use serde::Serialize;

use super::{format_count, Page, StatCard};
use crate::client::{Backend, ClientResult};
use crate::models::{Story, StoryFilter, StoryStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct StoriesPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoriesView {
    pub stories: Vec<Story>,
    pub stats: StoryStats,
}

#[async_trait(?Send)]
impl Page for StoriesPage {
    type View = StoriesView;
    const NAME: &'static str = "stories";

    async fn fetch(&self, backend: &dyn Backend) -> ClientResult<StoriesView> {
        let (stories, stats) = try_join!(
            backend.fetch_all_stories(StoryFilter::verified()),
            backend.fetch_story_stats(),
        )?;

        Ok(StoriesView { stories, stats })
    }
}

impl StoriesView {
    /// Characters of content shown per story card
    pub const EXCERPT_CHARS: usize = 200;

    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new(format_count(self.stats.total_stories), "Total Stories"),
            StatCard::new(format_count(self.stats.verified_stories), "Verified Stories"),
            StatCard::new(self.stats.category_count(), "Categories"),
            StatCard::new(self.stats.county_count(), "Counties"),
        ]
    }
}

pub const SUBMITTED_TITLE: &str = "Thank you for sharing your story!";
pub const SUBMITTED_BODY: &str = "It will be reviewed before publishing.";
pub const EMPTY_TITLE: &str = "No stories yet";
pub const EMPTY_HINT: &str = "Be the first to share your climate impact story!";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormFlow, StoryDraft};
    use crate::models::StoryCategory;
    use crate::page::PageController;
    use crate::testing::StubBackend;

    #[tokio::test]
    async fn test_only_verified_stories_listed() {
        let backend = StubBackend::seeded();
        let view = StoriesPage.fetch(&backend).await.unwrap();

        assert_eq!(view.stories.len(), 2);
        assert!(view.stories.iter().all(|s| s.verified));
        assert_eq!(view.stats.total_stories, 3);

        let cards = view.stat_cards();
        assert_eq!(cards[1], StatCard::new("2", "Verified Stories"));
        assert_eq!(cards[3], StatCard::new("3", "Counties"));
    }

    #[tokio::test]
    async fn test_new_story_counts_but_awaits_moderation() {
        let backend = StubBackend::seeded();
        let mut controller = PageController::new(StoriesPage);
        controller.mount(&backend).await;

        let mut flow = FormFlow::<StoryDraft>::new();
        *flow.draft_mut() = StoryDraft {
            title: "Locusts".to_string(),
            content: "They came in February.".to_string(),
            author: "Halima".to_string(),
            email: "halima@example.org".to_string(),
            location: "Wajir Town".to_string(),
            county: "Wajir".to_string(),
            category: StoryCategory::Agriculture,
            consent: true,
        };
        assert!(flow.submit(&backend).await.is_created());

        let view = controller.mount(&backend).await.ready().unwrap();
        assert_eq!(view.stats.total_stories, 4);
        assert_eq!(view.stories.len(), 2);
    }
}
