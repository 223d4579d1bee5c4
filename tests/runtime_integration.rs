use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use mentorlist::{
    core::{
        cmd::RequestId,
        msg::{ListMsg, Msg},
        state::{AppState, ListOptions, ListState, PaginationOptions, PagingMode},
    },
    domain::{
        records::{AuditLog, User},
        Facet,
    },
    infrastructure::source::MemorySource,
    integration::runtime::ListRuntime,
    test_helpers::{audit_logs, user, users},
};

/// Integration tests for list views backed by an asynchronous source
fn runtime(source: &MemorySource<User>, mode: PagingMode) -> ListRuntime<User> {
    let list = ListState::new(ListOptions {
        mode,
        ..ListOptions::default()
    });
    ListRuntime::new(AppState::new("Users", list), Arc::new(source.clone()))
}

/// Run update cycles until every fetch and mutation has been folded in
async fn settle(runtime: &mut ListRuntime<User>) {
    runtime.run_update_cycle().expect("update cycle");
    while runtime.state().list.is_loading() || runtime.get_stats().pending_mutations > 0 {
        assert!(runtime.recv().await, "channel closed while loading");
        runtime.run_update_cycle().expect("update cycle");
    }
    // Status messages sent by the executor land one cycle later
    runtime.run_update_cycle().expect("update cycle");
}

fn visible_ids(runtime: &ListRuntime<User>) -> Vec<String> {
    runtime
        .state()
        .list
        .visible_items()
        .iter()
        .map(|user| user.id.clone())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_server_paging_walks_pages() {
    let source = MemorySource::new(users(95));
    let mut runtime = runtime(&source, PagingMode::Server);
    runtime.send_msg(ListMsg::RefreshRequested);
    settle(&mut runtime).await;

    let list = &runtime.state().list;
    assert_eq!(list.matching_len(), 95);
    assert_eq!(list.pagination().total_pages(), 10);
    assert_eq!(list.items().len(), 10);

    runtime.send_msg(ListMsg::LastPage);
    settle(&mut runtime).await;
    assert_eq!(
        visible_ids(&runtime),
        vec!["u90", "u91", "u92", "u93", "u94"]
    );

    // A facet change goes back to page 1 of the narrowed result
    runtime.send_msg(ListMsg::FacetChanged {
        facet: Facet::Role,
        value: Some("mentor".to_string()),
    });
    settle(&mut runtime).await;
    let list = &runtime.state().list;
    assert_eq!(list.pagination().current_page(), 1);
    assert_eq!(list.matching_len(), 48);
    assert_eq!(visible_ids(&runtime)[..2].to_vec(), vec!["u0", "u2"]);
}

#[tokio::test(start_paused = true)]
async fn test_audit_log_view() {
    let list = ListState::new(ListOptions {
        mode: PagingMode::Server,
        pagination: PaginationOptions {
            initial_page_size: Some(50),
            ..PaginationOptions::default()
        },
        ..ListOptions::default()
    });
    let source = MemorySource::new(audit_logs(120));
    let mut runtime: ListRuntime<AuditLog> =
        ListRuntime::new(AppState::new("Audit logs", list), Arc::new(source));

    runtime.send_msg(ListMsg::RefreshRequested);
    runtime.run_update_cycle().expect("update cycle");
    while runtime.state().list.is_loading() {
        assert!(runtime.recv().await);
        runtime.run_update_cycle().expect("update cycle");
    }
    let list = &runtime.state().list;
    assert_eq!(list.pagination().total_pages(), 3);
    assert_eq!(list.visible_items().len(), 50);

    runtime.send_msg(ListMsg::SearchInput {
        value: "DELETE".to_string(),
        now: None,
    });
    runtime.send_msg(ListMsg::SearchSubmitted);
    runtime.run_update_cycle().expect("update cycle");
    while runtime.state().list.is_loading() {
        assert!(runtime.recv().await);
        runtime.run_update_cycle().expect("update cycle");
    }
    let list = &runtime.state().list;
    assert_eq!(list.matching_len(), 40);
    assert_eq!(list.pagination().total_pages(), 1);
    assert!(list
        .visible_items()
        .iter()
        .all(|log| log.action == "delete"));
}

#[tokio::test(start_paused = true)]
async fn test_server_search_is_sent_to_source() {
    let source = MemorySource::new(users(30));
    let mut runtime = runtime(&source, PagingMode::Server);
    runtime.send_msg(ListMsg::RefreshRequested);
    settle(&mut runtime).await;

    runtime.send_msg(ListMsg::SearchInput {
        value: "user 2".to_string(),
        now: None,
    });
    runtime.send_msg(ListMsg::SearchSubmitted);
    settle(&mut runtime).await;

    // "User 2" and "User 20".."User 29"
    assert_eq!(runtime.state().list.matching_len(), 11);
    assert_eq!(runtime.state().list.pagination().total_pages(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_fetch_never_lands() {
    let source = MemorySource::new(users(3)).with_latency(Duration::from_millis(100));
    let mut runtime = runtime(&source, PagingMode::Client);

    runtime.send_msg(ListMsg::RefreshRequested);
    runtime.run_update_cycle().expect("update cycle");
    runtime.send_msg(ListMsg::RefreshRequested);
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(runtime.get_stats().in_flight, Some(RequestId(2)));

    settle(&mut runtime).await;
    assert_eq!(runtime.get_stats().in_flight, None);
    assert_eq!(runtime.state().list.matching_len(), 3);

    let processed = runtime.get_stats().processed_messages;
    tokio::time::sleep(Duration::from_secs(1)).await;
    runtime.run_update_cycle().expect("update cycle");
    assert_eq!(runtime.get_stats().processed_messages, processed);
}

#[tokio::test(start_paused = true)]
async fn test_upsert_then_refetch() {
    let source = MemorySource::new(users(3));
    let mut runtime = runtime(&source, PagingMode::Client);
    runtime.send_msg(ListMsg::RefreshRequested);
    settle(&mut runtime).await;

    runtime.send_msg(ListMsg::UpsertRequested(user("u9", "Zed Shaw", "mentor")));
    settle(&mut runtime).await;

    assert_eq!(source.len(), 4);
    let list = &runtime.state().list;
    assert_eq!(list.matching_len(), 4);
    assert_eq!(list.items()[0].id, "u9");
}

#[tokio::test(start_paused = true)]
async fn test_failed_delete_keeps_server_truth() {
    let source = MemorySource::new(users(3));
    let mut runtime = runtime(&source, PagingMode::Client);
    runtime.send_msg(ListMsg::RefreshRequested);
    settle(&mut runtime).await;

    source.set_failing(true);
    runtime.send_msg(ListMsg::SelectNext);
    runtime.send_msg(Msg::DeleteSelectedRequested);
    settle(&mut runtime).await;

    // The refetch failed too, so the optimistic removal is still shown
    let state = runtime.state();
    assert_eq!(state.list.matching_len(), 2);
    assert_eq!(state.list.error(), Some("backend unavailable"));
    assert_eq!(
        state.status_message.as_deref(),
        Some("[Error] backend unavailable")
    );
    assert_eq!(source.len(), 3);

    source.set_failing(false);
    runtime.send_msg(ListMsg::RefreshRequested);
    settle(&mut runtime).await;
    assert_eq!(runtime.state().list.matching_len(), 3);
    assert_eq!(runtime.state().list.error(), None);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_work() {
    let source = MemorySource::new(users(3)).with_latency(Duration::from_millis(100));
    let mut runtime = runtime(&source, PagingMode::Client);
    runtime.send_msg(ListMsg::RefreshRequested);
    runtime.run_update_cycle().expect("update cycle");
    runtime.shutdown();

    tokio::time::sleep(Duration::from_secs(1)).await;
    runtime.run_update_cycle().expect("update cycle");
    assert!(runtime.state().list.is_loading());
    assert_eq!(runtime.state().list.matching_len(), 0);
}
