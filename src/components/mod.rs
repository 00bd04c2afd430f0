//! UI Components
//!
//! Reusable Leptos components shared by the dashboard panels.

pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use loading::{EmptyState, ErrorState, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;
