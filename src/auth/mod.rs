pub mod error;
pub mod password;
pub mod provider;
pub mod session;

pub use error::AuthError;
pub use password::{password_strength, PasswordStrength, StrengthLabel};
pub use provider::{AuthenticatedUser, FirebaseIdentityProvider, IdentityProvider};
pub use session::{PersistenceMode, Session, SessionManager};
