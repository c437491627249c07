//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod metadata_cmd;
mod product_cmd;
mod barcode_cmd;
mod inventory_cmd;
mod router_cmd;

pub use metadata_cmd::*;
pub use product_cmd::*;
pub use barcode_cmd::*;
pub use inventory_cmd::*;
pub use router_cmd::*;
