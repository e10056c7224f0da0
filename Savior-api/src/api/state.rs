use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use savior_domain::entities::{active_alerts, Alert};
use savior_domain::health::HealthServiceTrait;
use savior_domain::services::{Clock, SystemClock, VitalsServiceTrait, VitalsService};

use crate::config::ApiConfig;

/// Alert board errors
#[derive(Debug, Error, PartialEq)]
pub enum AlertBoardError {
    /// No alert with this id in the current set
    #[error("Alert {0} not found")]
    UnknownAlert(u32),
}

#[derive(Debug, Default)]
struct BoardState {
    alerts: Vec<Alert>,
    dismissed: HashSet<u32>,
}

/// Latest generated alert set plus the ids the user dismissed from it
///
/// Ids restart at 1 on every generation pass, so publishing a new set
/// forgets all earlier dismissals.
#[derive(Debug, Default)]
pub struct AlertBoard {
    state: RwLock<BoardState>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current set
    pub async fn publish(&self, alerts: Vec<Alert>) {
        let mut state = self.state.write().await;
        info!(count = alerts.len(), "Publishing alert set");
        state.alerts = alerts;
        state.dismissed.clear();
    }

    /// Hide an alert; dismissing it twice is harmless
    pub async fn dismiss(&self, id: u32) -> Result<(), AlertBoardError> {
        let mut state = self.state.write().await;
        if !state.alerts.iter().any(|alert| alert.id == id) {
            return Err(AlertBoardError::UnknownAlert(id));
        }
        if state.dismissed.insert(id) {
            debug!(id, "Alert dismissed");
        }
        Ok(())
    }

    /// Undismissed alerts in generation order (at most `max_display`) plus
    /// the set's counts, read under one lock so they always agree
    pub async fn view(&self, max_display: usize) -> BoardView {
        let state = self.state.read().await;
        BoardView {
            active: active_alerts(&state.alerts, &state.dismissed, max_display)
                .into_iter()
                .cloned()
                .collect(),
            total: state.alerts.len(),
            dismissed: state.dismissed.len(),
        }
    }
}

/// Consistent read of the board
#[derive(Debug, Clone)]
pub struct BoardView {
    pub active: Vec<Alert>,
    /// Alerts in the current set, dismissed or not
    pub total: usize,
    pub dismissed: usize,
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub vitals: Arc<dyn VitalsServiceTrait>,
    pub health: Arc<dyn HealthServiceTrait + Send + Sync>,
    pub alerts: Arc<AlertBoard>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Production state: wall-clock time and the canary-backed health service
    pub fn new(config: ApiConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::with_clock(config, clock)
    }

    /// State whose alerts and labels use the given clock
    pub fn with_clock(config: ApiConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            vitals: Arc::new(VitalsService::with_clock(clock.clone())),
            health: crate::api::handlers::health::create_health_service(),
            alerts: Arc::new(AlertBoard::new()),
            clock,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use savior_domain::entities::{AlertType, VitalSign};

    fn alert(id: u32) -> Alert {
        Alert {
            id,
            alert_type: AlertType::Warning,
            title: format!("Alert {}", id),
            message: "test".to_string(),
            timestamp: Utc::now(),
            vital: VitalSign::Stress,
        }
    }

    #[tokio::test]
    async fn test_dismiss_hides_alert() {
        let board = AlertBoard::new();
        board.publish(vec![alert(1), alert(2), alert(3)]).await;

        board.dismiss(2).await.unwrap();
        let view = board.view(5).await;
        let ids: Vec<u32> = view.active.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!((view.total, view.dismissed), (3, 1));
    }

    #[tokio::test]
    async fn test_dismiss_unknown_id() {
        let board = AlertBoard::new();
        board.publish(vec![alert(1)]).await;
        assert_eq!(board.dismiss(9).await, Err(AlertBoardError::UnknownAlert(9)));
    }

    #[tokio::test]
    async fn test_publish_clears_dismissals() {
        let board = AlertBoard::new();
        board.publish(vec![alert(1), alert(2)]).await;
        board.dismiss(1).await.unwrap();

        board.publish(vec![alert(1)]).await;
        let view = board.view(5).await;
        assert_eq!(view.active.len(), 1);
        assert_eq!((view.total, view.dismissed), (1, 0));
    }

    #[tokio::test]
    async fn test_view_agrees_with_concurrent_dismissals() {
        let board = Arc::new(AlertBoard::new());
        board.publish((1..=6).map(alert).collect()).await;

        let dismissals: Vec<_> = (1..=6)
            .map(|id| {
                let board = board.clone();
                tokio::spawn(async move { board.dismiss(id).await })
            })
            .collect();

        for _ in 0..20 {
            let view = board.view(10).await;
            assert_eq!(view.total, 6);
            assert_eq!(view.active.len() + view.dismissed, view.total);
        }

        for handle in dismissals {
            handle.await.unwrap().unwrap();
        }
        let view = board.view(10).await;
        assert!(view.active.is_empty());
        assert_eq!(view.dismissed, 6);
    }

    #[tokio::test]
    async fn test_active_respects_limit() {
        let board = AlertBoard::new();
        board.publish((1..=8).map(alert).collect()).await;
        assert_eq!(board.view(5).await.active.len(), 5);
        assert_eq!(board.view(2).await.active.len(), 2);
        assert_eq!(board.view(2).await.total, 8);
    }
}
