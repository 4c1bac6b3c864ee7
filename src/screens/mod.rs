//! Boot-time screens.

pub mod boot;
