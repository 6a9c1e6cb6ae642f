//! # ShapeKit Core
//!
//! Core types and utilities shared by every ShapeKit crate:
//! the [`Angle`] unit type and its parse errors.

pub mod error;
pub mod units;

pub use error::UnitError;
pub use units::{format_angle, parse_angle, Angle, AngleUnit};
