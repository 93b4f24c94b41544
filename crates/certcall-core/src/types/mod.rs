mod certificate;
mod identifier;
mod key;
mod outcome;
mod request;
mod scope;

pub use certificate::*;
pub use identifier::*;
pub use key::*;
pub use outcome::*;
pub use request::*;
pub use scope::*;
