pub mod messages;
pub mod widget;
