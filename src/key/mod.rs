//! Private and public key value objects
//!
//! Both types are immutable once constructed and carry a compression flag
//! alongside the mathematical key material. The flag is metadata attached
//! by the constructing context, never inferred from the scalar or point; it
//! controls serialization format only (WIF suffix byte, SEC1 prefix byte).

mod private;
mod public;

pub use private::PrivateKey;
pub use public::PublicKey;
