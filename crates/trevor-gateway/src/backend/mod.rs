//! Backend module.

mod echo;
mod memory;

pub use echo::EchoProcessor;
pub use memory::InMemorySessionStore;
