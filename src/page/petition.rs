//! Petition page: totals, recent supporters and the signing form

use async_trait::async_trait;
use futures_util::try_join;
use serde::Serialize;

use super::{format_count, ContentBlock, Page, StatCard};
use crate::client::{Backend, ClientResult};
use crate::models::{PetitionSignature, PetitionStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct PetitionPage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetitionView {
    pub stats: PetitionStats,
    /// First page of supporters, newest first
    pub signatures: Vec<PetitionSignature>,
}

impl PetitionPage {
    /// Supporters shown in the "Recent Supporters" list
    pub const PAGE_SIZE: u32 = 10;
}

#[async_trait(?Send)]
impl Page for PetitionPage {
    type View = PetitionView;
    const NAME: &'static str = "petition";

    async fn fetch(&self, backend: &dyn Backend) -> ClientResult<PetitionView> {
        let (stats, signatures) = try_join!(
            backend.fetch_petition_stats(),
            backend.fetch_signatures(1, Self::PAGE_SIZE),
        )?;

        Ok(PetitionView { stats, signatures })
    }
}

impl PetitionView {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new(format_count(self.stats.total_signatures), "Total Signatures"),
            StatCard::new(format_count(self.stats.recent_signatures), "This Week"),
            StatCard::new(self.stats.counties_represented(), "Counties Represented"),
            StatCard::new(format_count(PetitionStats::GOAL), "Our Goal"),
        ]
    }
}

pub const SUBMITTED_TITLE: &str = "Thank You for Signing!";
pub const SUBMITTED_BODY: &str =
    "Your signature has been added to the petition. Together, we're making a difference!";
pub const EMPTY_SUPPORTERS: &str = "Be the first to sign the petition!";

pub const DEMANDS: [ContentBlock; 3] = [
    ContentBlock {
        heading: "To the Kenyan Government:",
        body: "",
        points: &[
            "Strengthen climate change adaptation policies",
            "Invest in renewable energy infrastructure",
            "Support climate-smart agriculture",
            "Protect vulnerable communities",
        ],
    },
    ContentBlock {
        heading: "To the International Community:",
        body: "",
        points: &[
            "Provide adequate climate finance",
            "Transfer clean energy technology",
            "Honor climate funding commitments",
            "Support loss and damage mechanisms",
        ],
    },
    ContentBlock {
        heading: "To All Kenyans:",
        body: "",
        points: &[
            "Adopt sustainable practices",
            "Support local climate initiatives",
            "Educate others about climate justice",
            "Hold leaders accountable",
        ],
    },
];
