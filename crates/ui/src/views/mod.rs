mod account;
mod filter;
mod practice;
mod state;

pub use account::AccountView;
pub use filter::FilterView;
pub use practice::PracticeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
