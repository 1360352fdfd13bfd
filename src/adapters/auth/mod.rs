//! Authentication adapters.
//!
//! Implementations of the `IdentityProvider` port:
//!
//! - `mock` - Fixed demo identities, no credentials required

mod mock;

pub use mock::MockIdentityProvider;
