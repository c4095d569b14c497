/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Bearer token generation and validation
/// - [`middleware`]: Axum middleware resolving a bearer token to a user
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **Tokens**: HS256 signing with 24h expiration
/// - **Constant-time Comparison**: password verification never
///   short-circuits on mismatch

pub mod jwt;
pub mod middleware;
pub mod password;
