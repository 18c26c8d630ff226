pub mod average;
pub mod config;
pub mod error;
pub mod freelancer;
pub mod generator;
pub mod mount;
pub mod state;
pub mod view;

pub use average::average_rate;
pub use config::{ForumConfig, RateRange};
pub use error::{AggregateError, ConfigError, RenderError};
pub use freelancer::Freelancer;
pub use generator::FreelancerGenerator;
pub use mount::{require_mount, HostPage, StaticPage};
pub use state::AppState;
pub use view::ForumView;
