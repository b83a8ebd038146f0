use crate::schedule::ScheduleClient;
use crate::view::{AttendanceView, FetchTicket};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<AttendanceView>>,
    pub client: ScheduleClient,
}

impl AppState {
    pub fn new(view: AttendanceView, client: ScheduleClient) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
            client,
        }
    }

    /// Starts a fetch for the currently selected group in the background.
    pub async fn spawn_refresh(&self) {
        let ticket = self.view.lock().await.begin_fetch();
        self.spawn_fetch(ticket)
    }

    pub fn spawn_fetch(&self, ticket: FetchTicket) {
        let state = self.clone();
        tokio::spawn(async move { state.run_fetch(ticket).await });
    }

    // The lock is not held across the request.
    async fn run_fetch(&self, ticket: FetchTicket) {
        let result = self.client.fetch(ticket.group()).await;
        let mut view = self.view.lock().await;
        if view.complete_fetch(&ticket, result) {
            info!(group = ticket.group(), "schedule request finished");
        }
    }
}
