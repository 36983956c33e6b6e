mod preferences_port;
mod resolver_port;

pub use preferences_port::PreferencesPort;
#[cfg(test)]
pub use resolver_port::{MockImageResolver, MockTextResolver};
pub use resolver_port::{ImageResolver, TextResolver};
