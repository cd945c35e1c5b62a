pub mod markup_modal;
