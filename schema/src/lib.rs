// Movedex Schema - Shared record definitions
// This crate holds the move records and enums shared between the movedex
// library, its binary and any other presentation layer that reads the same
// dataset.

// Re-export the main types
pub use move_records::*;
pub use pokemon_types::*;

pub mod move_records;
pub mod pokemon_types;
