//! Reusable Dioxus RSX components for the AgriChain dashboard.

mod activity_list;
mod error_display;
mod loading_spinner;
mod notification_list;
mod profile_card;
mod registration_form;
mod stats_grid;
mod submission_banner;
mod wallet_header;
mod weather_card;

pub use activity_list::ActivityList;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use notification_list::NotificationList;
pub use profile_card::ProfileCard;
pub use registration_form::RegistrationForm;
pub use stats_grid::StatsGrid;
pub use submission_banner::SubmissionBanner;
pub use wallet_header::WalletHeader;
pub use weather_card::WeatherCard;

/// Shared card style.
pub(crate) const CARD_STYLE: &str =
    "padding: 16px; border: 1px solid #e2e8f0; border-radius: 12px; background: #fff;";
