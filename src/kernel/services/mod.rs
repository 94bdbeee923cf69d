//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS specific implementations (paths, settings files, keymaps).

pub mod adapters;
pub mod ports;
