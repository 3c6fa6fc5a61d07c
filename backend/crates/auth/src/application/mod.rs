//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod credential;
pub mod current_user;
pub mod login;
pub mod output;
pub mod register;
pub mod token;
pub mod update_user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use authenticate::{AuthenticateUseCase, CurrentUser};
pub use config::AuthConfig;
pub use credential::CredentialVerifier;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use output::UserOutput;
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{ClaimsCodec, JwtTokenService, TokenService};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
