//! Dashboard Panels
//!
//! One module per dashboard section; each owns its section's fetch,
//! render and interaction logic over the shared API client.

pub mod appointments;
pub mod config;
pub mod conversations;
pub mod statistics;

pub use appointments::AppointmentPanel;
pub use config::ConfigPanel;
pub use conversations::ConversationPanel;
pub use statistics::StatisticsPanel;
