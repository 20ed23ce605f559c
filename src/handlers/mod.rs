// handlers/mod.rs - HTTP handlers
//
// system:   public endpoints (/, /health)
// expenses: the owner-scoped expense collection (JWT required)
pub mod expenses;
pub mod system;
