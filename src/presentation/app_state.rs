// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::replay_service::ReplayService;

#[derive(Clone)]
pub struct AppState {
    pub replay_service: ReplayService,
    pub chart_service: ChartService,
}
