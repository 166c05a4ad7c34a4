use cloud_storage_config::UpdateStrategy;

use crate::actions::{Action, AuthAction};
use crate::reducers::reduce_cloud_storage;
use crate::state::CloudStoragesState;

/// Reducer - pure function that produces new state from current state + action
///
/// Uses the default update strategy (the list is replaced by the updated record).
pub fn reduce(state: CloudStoragesState, action: &Action) -> CloudStoragesState {
    reduce_with(state, action, UpdateStrategy::default())
}

/// Root reducer with an explicit update strategy
///
/// Actions that do not concern cloud storages return the state unchanged.
pub fn reduce_with(
    state: CloudStoragesState,
    action: &Action,
    update_strategy: UpdateStrategy,
) -> CloudStoragesState {
    match action {
        Action::CloudStorage(action) => reduce_cloud_storage(state, action, update_strategy),
        Action::Auth(AuthAction::LogoutSuccess) => {
            log::debug!("Logged out, resetting cloud storage state");
            CloudStoragesState::default()
        }
        _ => state,
    }
}
