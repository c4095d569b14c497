/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `user`: Registration and token issuance
/// - `tag`: Owner-scoped tag listing and creation
/// - `ingredient`: Owner-scoped ingredient listing and creation
/// - `recipe`: Owner-scoped recipe listing and creation

pub mod health;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
