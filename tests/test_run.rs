mod helpers;

use anyhow::Result;
use notekeeper::application::CacheFirstRepository;
use notekeeper::cli::args::Command;
use notekeeper::util::testing::{Call, CallLog, MockNoteCache, MockNoteService};
use notekeeper::{run_command, Outcome};
use std::sync::Arc;

fn add_command(title: &str) -> Command {
    Command::Add {
        title: title.to_string(),
        notes: "note".to_string(),
        due: None,
        complete: false,
    }
}

#[tokio::test]
async fn given_failing_load_when_listing_then_error_is_rendered_once_and_outcome_is_load_failed() -> Result<()> {
    // Arrange
    let repo = Arc::new(CacheFirstRepository::new(
        Arc::new(MockNoteService::builder().with_read_failure("offline").build()),
        Arc::new(MockNoteCache::builder().with_read_failure("locked").build()),
    ));

    // Act
    let (outcome, out) = run_command(Command::List { json: false }, repo, Vec::new()).await?;

    // Assert
    assert_eq!(outcome, Outcome::LoadFailed);
    let output = String::from_utf8(out)?;
    assert_eq!(
        output,
        "error: Failed to read notes from service: Store unavailable: offline\n"
    );
    Ok(())
}

#[tokio::test]
async fn given_failing_load_when_adding_then_nothing_is_saved() -> Result<()> {
    let log = CallLog::new();
    let repo = Arc::new(CacheFirstRepository::new(
        Arc::new(
            MockNoteService::builder()
                .with_read_failure("offline")
                .with_log(log.clone())
                .build(),
        ),
        Arc::new(MockNoteCache::builder().with_log(log.clone()).build()),
    ));

    let (outcome, _) = run_command(add_command("lost"), repo, Vec::new()).await?;

    assert_eq!(outcome, Outcome::LoadFailed);
    assert_eq!(log.calls(), vec![Call::CacheGet, Call::ServiceGet]);
    Ok(())
}

#[tokio::test]
async fn given_cached_notes_when_adding_then_saves_full_list_and_reports_new_id() -> Result<()> {
    // Arrange
    let log = CallLog::new();
    let cached = helpers::sample_notes();
    let cache = Arc::new(
        MockNoteCache::builder()
            .with_notes(cached.clone())
            .with_log(log.clone())
            .build(),
    );
    let repo = Arc::new(CacheFirstRepository::new(
        Arc::new(MockNoteService::builder().with_log(log.clone()).build()),
        cache.clone(),
    ));

    // Act
    let (outcome, out) = run_command(add_command("third"), repo, Vec::new()).await?;

    // Assert
    let Outcome::Added(id) = outcome else {
        panic!("Expected Added outcome, got {:?}", outcome);
    };
    assert_eq!(
        log.calls(),
        vec![Call::CacheGet, Call::ServiceSave(3), Call::CacheSave(3)]
    );
    let stored = cache.stored();
    assert_eq!(stored.last().map(|n| n.id()), Some(id));
    assert!(!String::from_utf8(out)?.contains("error:"));
    Ok(())
}

#[tokio::test]
async fn given_two_adds_against_sqlite_when_listing_then_earlier_notes_repeat() -> Result<()> {
    // Arrange
    let store = helpers::TestStore::new()?;
    let repo = Arc::new(CacheFirstRepository::new(
        Arc::new(notekeeper::infrastructure::StubService::new()),
        Arc::new(store.open_sqlite()?),
    ));

    // Act
    run_command(add_command("first"), repo.clone(), Vec::new()).await?;
    run_command(add_command("second"), repo.clone(), Vec::new()).await?;
    let (_, out) = run_command(Command::List { json: true }, repo, Vec::new()).await?;

    // Assert
    let listed: serde_json::Value = serde_json::from_slice(&out)?;
    let titles: Vec<&str> = listed
        .as_array()
        .expect("Should list an array")
        .iter()
        .filter_map(|n| n["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["first", "first", "second"]);
    Ok(())
}
