use crate::app::{action::Action, command::Command};
use crate::domain::store::Store;

/// Apply `command` to the store and report back. The returned actions always
/// start with the store's current document, so the UI matches what is in
/// memory even when the write failed.
pub async fn handle_command(command: Command, store: &mut Store) -> Vec<Action> {
    let result = match command {
        Command::CreateTrip(items) => store
            .create_trip(items)
            .await
            .map(|()| format!("New trip with {} items saved", store.document().total_count())),
        Command::Toggle(item) => store.toggle(&item).await.map(|packed| {
            if packed {
                format!("Packed {item}")
            } else {
                format!("Unpacked {item}")
            }
        }),
        Command::ResetTrip => store
            .reset_trip()
            .await
            .map(|()| "Checklist reset".to_string()),
        Command::AddCategory(name) => store.add_category(&name).await.map(|added| {
            if added {
                format!("Added category {name}")
            } else {
                format!("Category {name} left unchanged")
            }
        }),
        Command::DeleteCategory(name) => store
            .delete_category(&name)
            .await
            .map(|()| format!("Deleted category {name}")),
        Command::ReplaceItems(category, items) => store
            .replace_items(&category, items)
            .await
            .map(|()| format!("{category} updated and saved")),
    };

    let mut actions = vec![Action::DocumentUpdated(Box::new(store.document().clone()))];
    match result {
        Ok(msg) => {
            tracing::info!("{msg}");
            actions.push(Action::OperationCompleted(Ok(msg)));
        }
        Err(e) => {
            tracing::error!("command failed: {e}");
            actions.push(Action::OperationCompleted(Err(e.to_string())));
        }
    }
    actions
}
