//! Calendar date helpers.
//!
//! Dates enter the backend as text in a fixed day/month/year layout and leave
//! it as frame and slider labels. Both directions go through [`calendar`] so a
//! frame name and its slider label are always the same string.

pub mod calendar;

pub use calendar::{format_date_label, parse_date};
