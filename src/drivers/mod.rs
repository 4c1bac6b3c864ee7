//! Thin I2C sensor wrappers.
//!
//! Register-level reads only: conversion to engineering units happens here,
//! everything algorithmic happens in the library crate. Drivers are
//! stateless over a borrowed bus so multiple devices can share one I2C
//! peripheral.

mod aht10;
mod lsm303;
mod mpu6050;
mod source;

pub use aht10::Aht10;
pub use lsm303::Lsm303;
pub use mpu6050::Mpu6050;
pub use source::ClusterSource;
