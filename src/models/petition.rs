//! Petition signatures and their aggregates

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::story::GroupCount;

/// A recorded signature as returned by the backend
///
/// The signer's email is write-only and never part of this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetitionSignature {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub location: String,
    pub county: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl PetitionSignature {
    /// Name shown in the supporters list
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !self.is_anonymous && !name.trim().is_empty() => name,
            _ => "Anonymous",
        }
    }

    pub fn place(&self) -> String {
        format!("{}, {}", self.location, self.county)
    }

    pub fn display_date(&self) -> String {
        self.created_at.format("%b %d, %Y").to_string()
    }
}

/// Aggregates computed by `/petition/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetitionStats {
    pub total_signatures: u64,
    /// Signatures in the last seven days
    #[serde(default)]
    pub recent_signatures: u64,
    #[serde(default)]
    pub signatures_by_county: Vec<GroupCount>,
}

impl PetitionStats {
    /// Campaign target shown next to the totals
    pub const GOAL: u64 = 100_000;

    /// Aggregate all signatures as of `now`; "recent" means the last seven days
    pub fn from_signatures(signatures: &[PetitionSignature], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        Self {
            total_signatures: signatures.len() as u64,
            recent_signatures: signatures
                .iter()
                .filter(|s| s.created_at >= week_ago)
                .count() as u64,
            signatures_by_county: GroupCount::tally(signatures.iter().map(|s| s.county.as_str())),
        }
    }

    pub fn counties_represented(&self) -> usize {
        self.signatures_by_county.len()
    }

    /// Share of the goal reached, capped at 1.0
    pub fn progress(&self) -> f64 {
        (self.total_signatures as f64 / Self::GOAL as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(name: Option<&str>, anonymous: bool) -> PetitionSignature {
        PetitionSignature {
            id: "p1".to_string(),
            name: name.map(str::to_string),
            location: "Kibera".to_string(),
            county: "Nairobi".to_string(),
            comment: None,
            is_anonymous: anonymous,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(signature(Some("Jane"), false).display_name(), "Jane");
        assert_eq!(signature(Some("Jane"), true).display_name(), "Anonymous");
        assert_eq!(signature(None, false).display_name(), "Anonymous");
    }

    #[test]
    fn test_progress_is_capped() {
        let stats = PetitionStats {
            total_signatures: 250_000,
            ..Default::default()
        };
        assert_eq!(stats.progress(), 1.0);

        let stats = PetitionStats {
            total_signatures: 1_000,
            ..Default::default()
        };
        assert!((stats.progress() - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_null_name() {
        let json = r#"{"_id":"x","name":null,"location":"Lamu","county":"Lamu","isAnonymous":true,"createdAt":"2024-06-01T08:30:00Z"}"#;
        let sig: PetitionSignature = serde_json::from_str(json).unwrap();
        assert!(sig.is_anonymous);
        assert_eq!(sig.display_name(), "Anonymous");
    }

    #[test]
    fn test_stats_from_signatures_counts_last_week() {
        let now = Utc::now();
        let mut old = signature(Some("Wanjiru"), false);
        old.created_at = now - Duration::days(30);
        old.county = "Kiambu".to_string();
        let fresh = signature(Some("Jane"), false);

        let stats = PetitionStats::from_signatures(&[old, fresh], now);
        assert_eq!(stats.total_signatures, 2);
        assert_eq!(stats.recent_signatures, 1);
        assert_eq!(stats.counties_represented(), 2);
    }
}
