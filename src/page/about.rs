//! About page. Static content, no fetches.

use async_trait::async_trait;
use serde::Serialize;

use super::{ContentBlock, Page};
use crate::client::{Backend, ClientResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct AboutPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [ContentBlock],
}

#[async_trait(?Send)]
impl Page for AboutPage {
    type View = AboutView;
    const NAME: &'static str = "about";

    async fn fetch(&self, _backend: &dyn Backend) -> ClientResult<AboutView> {
        Ok(AboutView::CONTENT)
    }
}

impl AboutView {
    pub const CONTENT: AboutView = AboutView {
        title: "About Climate Paradox Kenya",
        tagline: "Understanding the injustice, advocating for solutions",
        sections: &SECTIONS,
    };
}

const SECTIONS: [ContentBlock; 2] = [
    ContentBlock {
        heading: "The Climate Paradox",
        body: "Kenya faces a profound climate injustice. While contributing less than 0.1% \
               of global greenhouse gas emissions, it suffers disproportionately from \
               climate change impacts.",
        points: &[
            "Recurrent Droughts: Affecting millions in arid and semi-arid regions",
            "Flooding: Destroying infrastructure and displacing communities",
            "Food Insecurity: Crop failures and livestock deaths",
            "Water Scarcity: Limited access to clean water",
            "Health Impacts: Spread of waterborne and vector-borne diseases",
        ],
    },
    ContentBlock {
        heading: "The Way Forward",
        body: "Despite the challenges, Kenya has immense potential for climate-resilient \
               development and can lead the way in sustainable solutions.",
        points: &[
            "Renewable Energy: Geothermal, wind, and solar potential",
            "Climate-Smart Agriculture: Sustainable farming practices",
            "Green Infrastructure: Building resilient communities",
            "Carbon Markets: Benefiting from conservation efforts",
            "Youth Innovation: Tech solutions for climate challenges",
        ],
    },
];

pub const MISSION: [ContentBlock; 3] = [
    ContentBlock {
        heading: "Raise Awareness",
        body: "Educate Kenyans about the climate paradox through data and stories",
        points: &[],
    },
    ContentBlock {
        heading: "Amplify Voices",
        body: "Share stories from affected communities to drive action",
        points: &[],
    },
    ContentBlock {
        heading: "Drive Action",
        body: "Mobilize citizens to demand climate justice and solutions",
        points: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::page::{load, PageState};
    use crate::testing::StubBackend;

    #[tokio::test]
    async fn test_resolves_without_network() {
        let backend = StubBackend::empty();
        backend.fail_with(ClientError::Timeout);

        let state = load(&AboutPage, &backend).await;
        assert_eq!(state, PageState::Ready(AboutView::CONTENT));
        assert_eq!(backend.calls(), 0);
    }
}
