//! Impact stories submitted by affected communities

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published (or pending) story as returned by the backend
///
/// The submitter's email is write-only and never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub location: String,
    pub county: String,
    pub category: StoryCategory,
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Story {
    /// First `max_chars` characters of the content, with an ellipsis when cut
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }

    /// "Turkana Village, Turkana"
    pub fn place(&self) -> String {
        format!("{}, {}", self.location, self.county)
    }

    pub fn display_date(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

/// Impact category a story is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    #[default]
    Drought,
    Floods,
    Agriculture,
    Livelihood,
    Health,
    Displacement,
}

impl StoryCategory {
    pub fn all() -> &'static [StoryCategory] {
        &[
            StoryCategory::Drought,
            StoryCategory::Floods,
            StoryCategory::Agriculture,
            StoryCategory::Livelihood,
            StoryCategory::Health,
            StoryCategory::Displacement,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoryCategory::Drought => "drought",
            StoryCategory::Floods => "floods",
            StoryCategory::Agriculture => "agriculture",
            StoryCategory::Livelihood => "livelihood",
            StoryCategory::Health => "health",
            StoryCategory::Displacement => "displacement",
        }
    }

    /// Label shown in the category select
    pub fn label(&self) -> &'static str {
        match self {
            StoryCategory::Drought => "Drought",
            StoryCategory::Floods => "Floods",
            StoryCategory::Agriculture => "Agriculture",
            StoryCategory::Livelihood => "Livelihood",
            StoryCategory::Health => "Health",
            StoryCategory::Displacement => "Displacement",
        }
    }
}

impl std::fmt::Display for StoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoryCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown story category: {}", s))
    }
}

/// Query filter for the story list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl StoryFilter {
    /// Only stories that passed moderation
    pub fn verified() -> Self {
        Self {
            verified: Some(true),
        }
    }
}

/// One bucket of a server-side group-by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupCount {
    #[serde(rename = "_id", alias = "key")]
    pub key: String,
    pub count: u64,
}

impl GroupCount {
    /// Count occurrences of each key, largest bucket first (ties by key)
    pub fn tally<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<GroupCount> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for key in keys {
            *counts.entry(key).or_default() += 1;
        }
        let mut groups: Vec<GroupCount> = counts
            .into_iter()
            .map(|(key, count)| GroupCount {
                key: key.to_string(),
                count,
            })
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        groups
    }
}

/// Aggregates computed by `/stories/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoryStats {
    pub total_stories: u64,
    #[serde(default)]
    pub verified_stories: u64,
    #[serde(default)]
    pub stories_by_category: Vec<GroupCount>,
    #[serde(default)]
    pub stories_by_county: Vec<GroupCount>,
}

impl StoryStats {
    /// Aggregate a full story collection the way `/stories/stats` does
    pub fn from_stories(stories: &[Story]) -> Self {
        Self {
            total_stories: stories.len() as u64,
            verified_stories: stories.iter().filter(|s| s.verified).count() as u64,
            stories_by_category: GroupCount::tally(stories.iter().map(|s| s.category.as_str())),
            stories_by_county: GroupCount::tally(stories.iter().map(|s| s.county.as_str())),
        }
    }

    pub fn category_count(&self) -> usize {
        self.stories_by_category.len()
    }

    pub fn county_count(&self) -> usize {
        self.stories_by_county.len()
    }
}
