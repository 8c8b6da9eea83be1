pub mod claims;
pub mod errors;
pub mod issuer;
pub mod registry;

pub use claims::Claims;
pub use claims::TokenPurpose;
pub use claims::DEFAULT_ACCESS_TTL_MINUTES;
pub use claims::DEFAULT_RESET_TTL_MINUTES;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use registry::UsedTokenRegistry;
