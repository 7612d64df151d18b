//! Helpers for media attached to testimonials.

pub mod youtube;

pub use youtube::VideoLink;
