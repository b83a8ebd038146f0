pub mod app;
pub mod attendance;
pub mod config;
pub mod demo;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use schedule::ScheduleClient;
pub use state::AppState;
pub use view::{AttendanceView, ViewSettings};
