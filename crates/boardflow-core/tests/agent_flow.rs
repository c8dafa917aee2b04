//! End-to-end flows through the public agent API, with a scripted
//! reasoning service standing in for the real one.

use async_trait::async_trait;
use boardflow_core::{
    AgentError, CanvasAgent, ReasoningReply, ReasoningRequest, ReasoningService, ToolCall,
};
use boardflow_store::{DocumentStore, MemoryStore};
use boardflow_types::{BoardId, ObjectKind};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Replays a fixed sequence of replies and counts how often it is asked
struct ScriptedReasoning {
    replies: Mutex<VecDeque<ReasoningReply>>,
    requests: AtomicUsize,
    last_request: Mutex<Option<ReasoningRequest>>,
}

impl ScriptedReasoning {
    fn new(replies: Vec<ReasoningReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReasoningService for ScriptedReasoning {
    async fn complete(&self, request: ReasoningRequest) -> Result<ReasoningReply, AgentError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request);
        self.replies
            .lock()
            .pop_front()
            .ok_or_else(|| AgentError::Reasoning("script exhausted".to_string()))
    }
}

fn call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        args,
    }
}

fn calls_reply(calls: Vec<ToolCall>) -> ReasoningReply {
    ReasoningReply { text: None, calls }
}

fn text_reply(text: &str) -> ReasoningReply {
    ReasoningReply {
        text: Some(text.to_string()),
        calls: vec![],
    }
}

fn board() -> BoardId {
    BoardId::from("b1")
}

#[tokio::test]
async fn recipe_prompts_never_reach_the_reasoning_service() {
    let store = Arc::new(MemoryStore::new());
    let reasoning = ScriptedReasoning::new(vec![]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    let reply = agent
        .run("create 10 stickies", &board(), "tester", &[], None)
        .await
        .unwrap();

    assert!(reply.contains("10"), "got: {reply}");
    assert_eq!(reasoning.request_count(), 0);
    assert_eq!(store.scan(&board()).await.unwrap().len(), 10);
}

#[tokio::test]
async fn bulk_creates_are_exact_and_distinct() {
    let store = Arc::new(MemoryStore::new());
    let agent = CanvasAgent::new(store.clone(), ScriptedReasoning::new(vec![]));

    agent
        .run("create 500 stickies", &board(), "tester", &[], None)
        .await
        .unwrap();

    let objects = store.scan(&board()).await.unwrap();
    assert_eq!(objects.len(), 500);
    assert_eq!(store.commit_count(), 2, "450-op cap forces two batches");
    let mut positions: Vec<(i64, i64)> = objects.iter().map(|o| (o.x as i64, o.y as i64)).collect();
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), 500, "every object gets its own position");
}

#[tokio::test]
async fn plan_call_resolves_forward_references() {
    let store = Arc::new(MemoryStore::new());
    let reasoning = ScriptedReasoning::new(vec![
        calls_reply(vec![call(
            "c1",
            "execute_plan",
            json!({ "ops": [
                { "op": "frame", "tempId": "f1", "title": "Plan", "x": 0.0, "y": 0.0, "width": 800.0, "height": 600.0 },
                { "op": "sticky", "tempId": "s1", "text": "inside", "parentId": "f1", "x": 100.0, "y": 100.0, "width": 120.0, "height": 120.0 },
                { "op": "connector", "fromId": "f1", "toId": "s1" },
            ] }),
        )]),
    ]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    let reply = agent
        .run(
            "set up a frame holding one wired note",
            &board(),
            "tester",
            &[],
            None,
        )
        .await
        .unwrap();

    assert_eq!(reply, "Created 3 object(s).");
    let objects = store.scan(&board()).await.unwrap();
    assert_eq!(objects.len(), 3);
    let frame = objects.iter().find(|o| o.kind() == ObjectKind::Frame).unwrap();
    let sticky = objects.iter().find(|o| o.kind() == ObjectKind::Sticky).unwrap();
    assert_eq!(sticky.parent_id.as_ref(), Some(&frame.id));
    for object in &objects {
        let raw = serde_json::to_string(object).unwrap();
        assert!(!raw.contains("\"f1\""), "tempId leaked into storage: {raw}");
    }
}

#[tokio::test]
async fn read_only_rounds_continue_the_loop() {
    let store = Arc::new(MemoryStore::new());
    let reasoning = ScriptedReasoning::new(vec![
        calls_reply(vec![call("c1", "get_board_summary", json!({}))]),
        calls_reply(vec![call(
            "c2",
            "create_sticky",
            json!({ "text": "after looking", "x": 10.0, "y": 10.0 }),
        )]),
    ]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    let reply = agent
        .run(
            "look at the board, then note what you see",
            &board(),
            "tester",
            &[],
            None,
        )
        .await
        .unwrap();

    assert_eq!(reply, "Created a sticky note.");
    assert_eq!(reasoning.request_count(), 2);
    assert_eq!(store.scan(&board()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn quantity_correction_runs_once() {
    let store = Arc::new(MemoryStore::new());
    let short_plan = |n: usize, offset: f64| -> serde_json::Value {
        json!({ "ops": (0..n).map(|i| json!({
            "op": "sticky",
            "text": format!("idea {i}"),
            "x": offset + i as f64 * 200.0,
            "y": 0.0,
        })).collect::<Vec<_>>() })
    };
    let reasoning = ScriptedReasoning::new(vec![
        calls_reply(vec![call("c1", "execute_plan", short_plan(6, 0.0))]),
        // Correction round answer.
        calls_reply(vec![call("c2", "execute_plan", short_plan(4, 2000.0))]),
    ]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    // "about" keeps this off the deterministic path.
    agent
        .run(
            "create 10 stickies about the roadmap",
            &board(),
            "tester",
            &[],
            None,
        )
        .await
        .unwrap();

    assert_eq!(store.scan(&board()).await.unwrap().len(), 10);
    assert_eq!(reasoning.request_count(), 2);
}

#[tokio::test]
async fn text_only_answer_to_a_counted_prompt_gets_corrected() {
    let store = Arc::new(MemoryStore::new());
    let plan = json!({ "ops": (0..3).map(|i| json!({
        "op": "sticky",
        "text": format!("note {i}"),
        "x": i as f64 * 200.0,
        "y": 0.0,
    })).collect::<Vec<_>>() });
    let reasoning = ScriptedReasoning::new(vec![
        // Claims success without calling a single tool.
        text_reply("I placed the stickies."),
        calls_reply(vec![call("c1", "execute_plan", plan)]),
    ]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    let reply = agent
        .run(
            "make 3 stickies about velocity",
            &board(),
            "tester",
            &[],
            None,
        )
        .await
        .unwrap();

    assert_eq!(reply, "Created 3 object(s).");
    assert_eq!(store.scan(&board()).await.unwrap().len(), 3);
    assert_eq!(reasoning.request_count(), 2);
}

#[tokio::test]
async fn failed_tool_calls_feed_back_as_results() {
    let store = Arc::new(MemoryStore::new());
    // Round one only reads and fails, so the loop continues and the
    // failure result is visible in the next request's history.
    let reasoning = ScriptedReasoning::new(vec![
        calls_reply(vec![
            call("c1", "move_object", json!({ "id": "ghost", "x": 0.0, "y": 0.0 })),
            call("c2", "get_board_summary", json!({})),
        ]),
        calls_reply(vec![call(
            "c3",
            "create_sticky",
            json!({ "text": "survivor", "x": 0.0, "y": 0.0 }),
        )]),
    ]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    let reply = agent
        .run(
            "move the ghost and mark the spot",
            &board(),
            "tester",
            &[],
            None,
        )
        .await
        .unwrap();

    // The failed move becomes data; the create still lands.
    assert_eq!(reply, "Created a sticky note.");
    assert_eq!(store.scan(&board()).await.unwrap().len(), 1);
    let request = reasoning.last_request.lock().clone().unwrap();
    let raw = serde_json::to_string(&request.messages).unwrap();
    assert!(raw.contains("\"ok\":false"), "failure result missing: {raw}");
}

#[tokio::test]
async fn reasoning_failure_aborts_the_request() {
    let store = Arc::new(MemoryStore::new());
    let agent = CanvasAgent::new(store, ScriptedReasoning::new(vec![]));

    let err = agent
        .run("do something unusual with the board", &board(), "tester", &[], None)
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::Reasoning(_)));
}

#[tokio::test]
async fn selection_forces_a_snapshot_into_the_request() {
    let store = Arc::new(MemoryStore::new());
    let reasoning = ScriptedReasoning::new(vec![text_reply("it's a sticky")]);
    let agent = CanvasAgent::new(store.clone(), reasoning.clone());

    // Seed one object through the deterministic path.
    agent
        .run("create 1 sticky", &board(), "tester", &[], None)
        .await
        .unwrap();
    let id = store.scan(&board()).await.unwrap()[0].id.clone();

    agent
        .run("tell me a fun fact", &board(), "tester", &[id.clone()], None)
        .await
        .unwrap();

    let request = reasoning.last_request.lock().clone().unwrap();
    let raw = serde_json::to_string(&request.messages).unwrap();
    assert!(raw.contains(&id.to_string()), "selection id missing from context");
    assert!(raw.contains("objects on the board"), "snapshot missing");
}
