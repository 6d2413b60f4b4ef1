//! Network actor - runs command workflows in the Tokio async runtime

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{self, JoinSet};

use crate::api::InventoryApi;
use crate::messages::{CommandOutcome, Listing, NetworkCommand, NetworkResponse, Notice};
use crate::network::workflow::{self, WorkflowSettings};

/// Network actor that executes inventory commands against the API
pub struct NetworkActor {
    api: Arc<dyn InventoryApi>,
    settings: Arc<WorkflowSettings>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
    /// Request id of each running task
    in_flight: HashMap<task::Id, u64>,
}

impl NetworkActor {
    pub fn new(
        api: Arc<dyn InventoryApi>,
        settings: WorkflowSettings,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            api,
            settings: Arc::new(settings),
            response_tx,
            active_requests: JoinSet::new(),
            in_flight: HashMap::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, command }) => {
                            let api = Arc::clone(&self.api);
                            let settings = Arc::clone(&self.settings);
                            let response_tx = self.response_tx.clone();

                            let handle = self.active_requests.spawn(async move {
                                tracing::info!(id, ?command, "Executing command");
                                let outcome = workflow::execute(api.as_ref(), &command, &settings).await;
                                tracing::info!(id, notices = outcome.notices.len(), "Command completed");
                                let _ = response_tx.send(NetworkResponse::Completed { id, outcome });
                            });
                            self.in_flight.insert(handle.id(), id);
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(result) = self.active_requests.join_next_with_id() => {
                    match result {
                        Ok((task_id, ())) => {
                            self.in_flight.remove(&task_id);
                        }
                        Err(e) => {
                            let id = self.in_flight.remove(&e.id());
                            tracing::error!(?id, error = %e, "Command task panicked");
                            // The app is still waiting on this id
                            if let Some(id) = id {
                                let _ = self.response_tx.send(aborted_response(id, &e));
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Reply for a command whose task died before it could answer
fn aborted_response(id: u64, err: &task::JoinError) -> NetworkResponse {
    NetworkResponse::Completed {
        id,
        outcome: CommandOutcome {
            notices: vec![Notice::error(
                "Command Error",
                format!("Command failed unexpectedly: {}", err),
            )],
            listing: Listing::Unchanged,
        },
    }
}
