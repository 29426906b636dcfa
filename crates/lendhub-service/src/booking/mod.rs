//! Booking lifecycle and temporal-query service.

pub mod service;

pub use service::{BookingService, CreateBookingRequest};
