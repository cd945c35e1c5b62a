pub mod badge;
pub mod dialog;
pub mod field;
pub mod form;
pub mod snippet;

pub use badge::*;
pub use dialog::*;
pub use field::*;
pub use form::*;
pub use snippet::*;
