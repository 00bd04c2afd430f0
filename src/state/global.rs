//! Global Application State
//!
//! Reactive state shared by the dashboard panels, managed with Leptos
//! signals, plus the wire types those signals hold.

use leptos::*;

use super::filter::PeriodFilter;

/// Aggregate counters returned by `GET /estatisticas`.
///
/// Every field is optional on the wire; a missing counter renders as zero.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct StatisticsSnapshot {
    #[serde(rename = "total_consultas", default)]
    pub total_bookings: u64,
    #[serde(rename = "usuarios_unicos", default)]
    pub unique_users: u64,
    #[serde(rename = "consultas_criadas_hoje", default)]
    pub created_today: Option<u64>,
    #[serde(rename = "consultas_hoje", default)]
    pub scheduled_today: Option<u64>,
}

impl StatisticsSnapshot {
    /// Today's counter. Depending on its version the server reports either
    /// the bookings created today or the bookings scheduled for today; the
    /// created count wins when both are present.
    pub fn today_count(&self) -> u64 {
        self.created_today.or(self.scheduled_today).unwrap_or(0)
    }
}

/// Who sent a conversation message. Anything the server labels with an
/// unknown sender reads as the bot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    #[default]
    #[serde(other)]
    Bot,
}

/// One message from `GET /historico/{user_id}`, kept in server order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConversationMessage {
    #[serde(rename = "remetente", default)]
    pub sender: Sender,
    #[serde(rename = "mensagem", default)]
    pub text: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A scheduled appointment from `GET /consultas`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Appointment {
    /// Booking date in `DD/MM/YYYY`. Absent or malformed dates stay
    /// visible in the unfiltered view but never match a time window.
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(rename = "periodo", default)]
    pub period: String,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<String>,
}

/// Global application state provided to all panels
#[derive(Clone)]
pub struct GlobalState {
    /// Latest statistics snapshot
    pub stats: RwSignal<StatisticsSnapshot>,
    /// All appointments as last fetched; the single source of truth for
    /// filtering, which never re-fetches
    pub appointments: RwSignal<Vec<Appointment>>,
    /// Active appointment time-window filter
    pub period_filter: RwSignal<PeriodFilter>,
    /// User whose conversation was last opened in the detail modal
    pub current_user_id: RwSignal<Option<String>>,
    /// Whether the startup health check succeeded
    pub api_online: RwSignal<bool>,
    /// Timestamp of the last successful statistics refresh
    pub last_updated: RwSignal<Option<i64>>,
    /// Global loading state for the initial load
    pub loading: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Warning message (for toasts)
    pub warning: RwSignal<Option<String>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        stats: create_rw_signal(StatisticsSnapshot::default()),
        appointments: create_rw_signal(Vec::new()),
        period_filter: create_rw_signal(PeriodFilter::default()),
        current_user_id: create_rw_signal(None),
        api_online: create_rw_signal(false),
        last_updated: create_rw_signal(None),
        loading: create_rw_signal(false),
        success: create_rw_signal(None),
        warning: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            signal.set(None);
        })
        .forget();
    }

    /// Show a warning message (auto-clears after timeout)
    pub fn show_warning(&self, message: &str) {
        self.warning.set(Some(message.to_string()));

        let signal = self.warning;
        gloo_timers::callback::Timeout::new(4000, move || {
            signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_missing_fields_default_to_zero() {
        let stats: StatisticsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.unique_users, 0);
        assert_eq!(stats.today_count(), 0);
    }

    #[test]
    fn created_today_wins_over_scheduled_today() {
        let stats: StatisticsSnapshot =
            serde_json::from_str(r#"{"consultas_criadas_hoje": 4, "consultas_hoje": 9}"#).unwrap();
        assert_eq!(stats.today_count(), 4);

        let stats: StatisticsSnapshot = serde_json::from_str(r#"{"consultas_hoje": 9}"#).unwrap();
        assert_eq!(stats.today_count(), 9);
    }

    #[test]
    fn unknown_sender_reads_as_bot() {
        let msg: ConversationMessage = serde_json::from_str(
            r#"{"remetente": "assistant", "mensagem": "oi", "timestamp": "2024-05-10 09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(msg.sender, Sender::Bot);

        let msg: ConversationMessage =
            serde_json::from_str(r#"{"remetente": "user", "mensagem": "olá"}"#).unwrap();
        assert_eq!(msg.sender, Sender::User);
    }

    #[test]
    fn appointment_tolerates_missing_fields() {
        let apt: Appointment =
            serde_json::from_str(r#"{"nome": "Maria", "user_id": "5511999990000"}"#).unwrap();
        assert_eq!(apt.date, None);
        assert_eq!(apt.name, "Maria");
        assert_eq!(apt.period, "");
    }
}
