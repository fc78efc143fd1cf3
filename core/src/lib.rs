//! Core of the kubenav dashboard: panel focus, key routing, sub-menu and
//! scroll state, plus the startup configuration that wires them together.

pub mod config;
pub mod navigation;
