//! CareFit - Clinical intake and adapted care-plan review.
//!
//! Patients describe the constraints of their real life (shift work, commute,
//! food access, sleep, stress, living situation). Doctors review the derived
//! conflict flags and author an adapted care plan that fits that life.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
