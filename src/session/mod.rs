pub mod controller;
pub mod state;
pub mod view;


pub use controller::*;
pub use state::*;
pub use view::*;
