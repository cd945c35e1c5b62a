pub mod error;

pub mod badge_url;
pub mod config;
pub mod example;
pub mod form_state;
pub mod markup;
pub mod pattern;
pub mod query;
pub mod style;

pub use error::*;

pub use badge_url::*;
pub use config::*;
pub use example::*;
pub use form_state::*;
pub use markup::*;
pub use pattern::*;
pub use query::*;
pub use style::*;
