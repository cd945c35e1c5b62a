pub mod content;
mod path_builder;
mod query_string_builder;

pub use content::BadgePreviewForm;
