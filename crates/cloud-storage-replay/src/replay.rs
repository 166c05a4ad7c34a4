//! Folding an action log through the store

use anyhow::{Context, Result};
use cloud_storage_config::AppConfig;
use cloud_storage_store::{Action, CloudStoragesState, Store};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON array of actions
pub fn load_actions(path: &Path) -> Result<Vec<Action>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read action log: {:?}", path))?;
    parse_actions(&content).with_context(|| format!("Failed to parse action log: {:?}", path))
}

/// Parse the log array; entries this store does not know become `Action::None`
fn parse_actions(content: &str) -> Result<Vec<Action>> {
    let entries: Vec<Value> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| decode_action(idx, entry))
        .collect())
}

fn decode_action(idx: usize, entry: Value) -> Action {
    let tag = entry
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("<untagged>")
        .to_string();

    match serde_json::from_value(entry) {
        Ok(action) => action,
        Err(e) => {
            log::warn!("Ignoring action #{} ({}): {}", idx, tag, e);
            Action::None
        }
    }
}

/// Dispatch all actions in order and return the final state
pub fn replay(actions: Vec<Action>, config: &AppConfig) -> CloudStoragesState {
    let mut store = Store::with_config(CloudStoragesState::default(), config);
    let total = actions.len();

    for action in actions {
        store.dispatch(action);
    }

    log::info!("Replayed {} actions", total);
    store.state().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_storage_store::{CloudStorageAction, CloudStorageId, DeleteStatus};

    const LOG: &str = r#"[
        {"type": "cloud_storage", "payload": {"type": "get"}},
        {"type": "cloud_storage", "payload": {"type": "get_success", "payload": {
            "array": [
                {"id": 1, "display_name": "raw", "provider_type": "AWS_S3_BUCKET",
                 "resource": "raw", "credentials_type": "ANONYMOUS_ACCESS"},
                {"id": 2, "display_name": "curated", "provider_type": "AZURE_CONTAINER",
                 "resource": "curated", "credentials_type": "ACCOUNT_NAME_TOKEN_PAIR"}
            ],
            "count": 2,
            "query": {"search": "r"}
        }}},
        {"type": "cloud_storage", "payload": {"type": "delete", "payload": {"cloud_storage_id": 2}}},
        {"type": "notifications_reset"},
        {"type": "cloud_storage", "payload": {"type": "load_content", "payload": {"cloud_storage_id": 1}}},
        {"type": "cloud_storage", "payload": {"type": "load_content_success", "payload": {
            "cloud_storage_id": 1, "content": ["manifest.jsonl", "images/"]
        }}}
    ]"#;

    #[test]
    fn test_replay_action_log() {
        let actions = parse_actions(LOG).unwrap();
        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], Action::CloudStorage(CloudStorageAction::Get));
        assert_eq!(actions[3], Action::None);

        let state = replay(actions, &AppConfig::default());
        assert!(state.initialized);
        assert_eq!(state.count, 2);
        assert_eq!(state.getting_query.search.as_deref(), Some("r"));
        assert_eq!(state.getting_query.page, 1);
        assert_eq!(
            state.delete_status(CloudStorageId::new(2)),
            DeleteStatus::InProgress
        );
        assert_eq!(
            state.activities.content_loads.content,
            Some(vec!["manifest.jsonl".to_string(), "images/".to_string()])
        );
    }

    #[test]
    fn test_replay_then_logout() {
        let mut actions = parse_actions(LOG).unwrap();
        actions.extend(
            parse_actions(r#"[{"type": "auth", "payload": {"type": "logout_success"}}]"#).unwrap(),
        );
        let state = replay(actions, &AppConfig::default());
        assert_eq!(state, CloudStoragesState::default());
    }

    #[test]
    fn test_unknown_actions_with_payload_leave_state_unchanged() {
        let baseline = replay(parse_actions(LOG).unwrap(), &AppConfig::default());

        let mut actions = parse_actions(LOG).unwrap();
        let foreign = parse_actions(
            r#"[
                {"type": "tasks_updated", "payload": {"id": 1, "status": "completed"}},
                {"type": "cloud_storage", "payload": {"type": "get_cloud_storage_status",
                    "payload": {"cloud_storage_id": 1}}},
                {"type": "auth", "payload": {"type": "password_changed", "payload": {}}},
                "not-an-action",
                42
            ]"#,
        )
        .unwrap();
        assert!(foreign.iter().all(|action| *action == Action::None));
        actions.extend(foreign);

        let state = replay(actions, &AppConfig::default());
        assert_eq!(state, baseline);
    }

    #[test]
    fn test_parse_rejects_non_array_log() {
        assert!(parse_actions(r#"{"type": "cloud_storage"}"#).is_err());
        assert!(parse_actions("not json").is_err());
    }
}
