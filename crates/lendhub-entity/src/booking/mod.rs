//! Booking domain entities: the record itself, its status machine, and
//! the state filter keywords used by list queries.

pub mod model;
pub mod state;
pub mod status;

pub use model::{Booking, CreateBooking};
pub use state::BookingState;
pub use status::BookingStatus;
