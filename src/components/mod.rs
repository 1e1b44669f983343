pub mod editor;
pub mod header;
pub mod popup;
pub mod status;
