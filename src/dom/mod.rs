//! Container handles
//!
//! The renderer writes into a container it is handed rather than looking
//! one up by name. Lookup happens once, up front, through a [`ContainerHost`].

pub mod container;
pub mod memory;

pub use container::{resolve_container, Container, ContainerHost};
pub use memory::{MemoryContainer, MemoryHost};
