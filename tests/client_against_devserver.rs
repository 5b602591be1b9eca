//! HttpBackend and the page/form layers against a live devserver

use std::time::Duration;

use paradox::config::DevServerConfig;
use paradox::devserver::{build_router, AppState};
use paradox::forms::{FieldChange, FormFlow, FormPhase, SubmitOutcome};
use paradox::page::{load, CategoryFilter, DataPage, PageController, PetitionPage, StoriesPage};
use paradox::{
    Backend, ClientError, HttpBackend, SignatureDraft, StoryCategory, StoryDraft, StoryFilter,
};

/// Serve a seeded devserver on an ephemeral port and return its API base
async fn spawn_devserver() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = build_router(AppState::seeded(DevServerConfig::default()));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/api", addr)
}

async fn backend() -> HttpBackend {
    let base = spawn_devserver().await;
    HttpBackend::new(&base, Duration::from_secs(5)).unwrap()
}

fn signature_flow(name: &str, email: &str) -> FormFlow<SignatureDraft> {
    let mut flow = FormFlow::new();
    for (field, value) in [
        ("name", name),
        ("email", email),
        ("location", "Nairobi"),
        ("county", "Nairobi"),
        ("comment", ""),
    ] {
        flow.change(&FieldChange::text(field, value)).unwrap();
    }
    flow.change(&FieldChange::checkbox("isAnonymous", false))
        .unwrap();
    flow
}

#[tokio::test]
async fn test_signing_increments_total_by_one() {
    let backend = backend().await;
    let mut controller = PageController::new(PetitionPage);

    let before = controller
        .mount(&backend)
        .await
        .ready()
        .unwrap()
        .stats
        .total_signatures;

    let mut flow = signature_flow("Jane", "jane@x.com");
    match flow.submit(&backend).await {
        SubmitOutcome::Created(signature) => {
            assert_eq!(signature.display_name(), "Jane");
            assert!(!signature.id.is_empty());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(flow.phase(), FormPhase::Submitted);
    assert!(flow.draft().name.is_empty());

    let view = controller.mount(&backend).await.ready().unwrap();
    assert_eq!(view.stats.total_signatures, before + 1);
    assert_eq!(view.signatures[0].display_name(), "Jane");
}

#[tokio::test]
async fn test_duplicate_signature_message_reaches_the_form() {
    let backend = backend().await;

    let mut first = signature_flow("Jane", "jane@x.com");
    assert!(first.submit(&backend).await.is_created());

    let mut second = signature_flow("Jane Again", "JANE@x.com");
    let outcome = second.submit(&backend).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("You have already signed this petition".to_string())
    );
    assert_eq!(second.phase(), FormPhase::Editing);
    assert_eq!(second.draft().name, "Jane Again");
    assert_eq!(
        second.error(),
        Some("You have already signed this petition")
    );
}

#[tokio::test]
async fn test_shared_story_waits_for_moderation() {
    let backend = backend().await;
    let published_before = backend
        .fetch_all_stories(StoryFilter::verified())
        .await
        .unwrap()
        .len();

    let mut flow = FormFlow::<StoryDraft>::new();
    *flow.draft_mut() = StoryDraft {
        title: "Flooded market".to_string(),
        content: "The river took the stalls in one night.".to_string(),
        author: "Akinyi".to_string(),
        email: "akinyi@example.org".to_string(),
        location: "Budalangi".to_string(),
        county: "Busia".to_string(),
        category: StoryCategory::Floods,
        consent: true,
    };

    match flow.submit(&backend).await {
        SubmitOutcome::Created(story) => {
            assert!(!story.verified);
            assert_eq!(story.category, StoryCategory::Floods);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let view = match load(&StoriesPage, &backend).await {
        paradox::PageState::Ready(view) => view,
        other => panic!("stories page did not load: {:?}", other),
    };
    assert_eq!(view.stories.len(), published_before);
    assert!(view.stories.iter().all(|s| s.title != "Flooded market"));
    assert_eq!(view.stats.total_stories as usize, published_before + 1);
}

#[tokio::test]
async fn test_category_filter_matches_server_filter() {
    let backend = backend().await;

    let view = match load(&DataPage, &backend).await {
        paradox::PageState::Ready(view) => view,
        other => panic!("data page did not load: {:?}", other),
    };
    assert!(view.categories.contains(&"emissions".to_string()));

    let filter = CategoryFilter::parse("emissions");
    let local: Vec<_> = view.filtered(&filter).cloned().collect();
    let remote = backend
        .fetch_climate_data_by_category("emissions")
        .await
        .unwrap();

    assert!(!local.is_empty());
    assert_eq!(local, remote);
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_before_sending() {
    let backend = backend().await;
    let total = backend.fetch_petition_stats().await.unwrap().total_signatures;

    let mut flow = signature_flow("", "jane@x.com");
    assert!(matches!(
        flow.submit(&backend).await,
        SubmitOutcome::Rejected(_)
    ));

    let after = backend.fetch_petition_stats().await.unwrap().total_signatures;
    assert_eq!(after, total);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let backend = HttpBackend::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();

    let err = backend.fetch_petition_stats().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(_) | ClientError::Timeout
    ));

    let state = load(&PetitionPage, &backend).await;
    assert_eq!(state.error(), Some(err.user_message().as_str()));
}
