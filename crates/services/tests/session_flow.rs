use std::time::Duration;

use exam_core::model::{QuestionFilter, Score, Selection, Verdict};
use exam_core::time::{fixed_clock, fixed_now};
use services::{
    AppServices, CatalogError, Clock, Direction, SessionError, SubmitReason, TestConfig,
};
use storage::Storage;
use storage::demo::demo_bank;

async fn services(clock: Clock) -> AppServices {
    AppServices::load(&Storage::in_memory(demo_bank()), clock)
        .await
        .unwrap()
}

#[tokio::test]
async fn manual_test_from_catalog_defaults() {
    let app = services(fixed_clock()).await;
    let filter = QuestionFilter::new(Selection::named("Mathematics"), Selection::named("Algebra"));
    let config = app.catalog().default_config(filter).unwrap();
    assert_eq!(config.question_count(), 3);
    assert_eq!(config.timer_minutes(), 3);

    let sessions = app.sessions();
    let mut session = sessions.start(&config).unwrap();
    session.select_option(1);
    session.navigate(Direction::Next);
    session.select_option(0);
    session.submit(fixed_now());

    let report = sessions.report(&session).unwrap();
    assert_eq!(report.heading, "Mathematics - Algebra");
    assert_eq!(
        report.score,
        Score {
            correct: 1,
            incorrect: 1,
            unattempted: 1
        }
    );
    let verdicts: Vec<_> = report.items.iter().map(|item| item.verdict).collect();
    assert_eq!(
        verdicts,
        vec![Verdict::Correct, Verdict::Incorrect, Verdict::Unattempted]
    );
}

#[tokio::test]
async fn empty_topic_cannot_start() {
    let app = services(fixed_clock()).await;
    let filter = QuestionFilter::new(
        Selection::named("Computer Science"),
        Selection::named("Compilers"),
    );
    assert!(matches!(
        app.catalog().default_config(filter.clone()),
        Err(CatalogError::NoQuestions { .. })
    ));

    let config = TestConfig::new(filter, 5, 5).unwrap();
    assert!(matches!(
        app.sessions().start(&config),
        Err(SessionError::Empty)
    ));
}

#[tokio::test(start_paused = true)]
async fn live_test_auto_submits_when_time_runs_out() {
    let app = services(fixed_clock()).await;
    let config = TestConfig::from_form("Physics", "All", 10, 1).unwrap();
    let live = app.sessions().start_live(&config).unwrap();

    live.select_answer("Newton").await.unwrap();
    live.jump_to(2).await.unwrap();
    live.select_option(2).await.unwrap();

    let started = tokio::time::Instant::now();
    let done = live.finished().await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_secs(60));
    assert_eq!(done.submit_reason, Some(SubmitReason::Forced));
    assert_eq!(
        done.score,
        Some(Score {
            correct: 1,
            incorrect: 1,
            unattempted: 1
        })
    );

    // Intents after submission change nothing.
    live.select_option(0).await.unwrap();
    live.navigate(Direction::Previous).await.unwrap();
    assert_eq!(live.submit().await.unwrap(), done.score.unwrap());
    assert_eq!(live.snapshot(), done);
}

#[tokio::test(start_paused = true)]
async fn live_manual_submit_wins_over_the_countdown() {
    let app = services(fixed_clock()).await;
    let config = TestConfig::from_form("All", "All", 4, 1).unwrap();
    let live = app.sessions().start_live(&config).unwrap();
    let mut updates = live.subscribe();

    live.select_option(1).await.unwrap();
    updates
        .wait_for(|s| s.remaining_secs <= 30)
        .await
        .unwrap();

    let score = live.submit().await.unwrap();
    assert_eq!(score.correct, 1);
    assert_eq!(score.total(), 4);

    let done = live.finished().await.unwrap();
    assert_eq!(done.submit_reason, Some(SubmitReason::Manual));
    assert!(done.remaining_secs > 0);
    live.close().await;
}
