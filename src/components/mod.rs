mod action_button;

pub use action_button::ActionButton;
