//! Domain Layer
//!
//! Path resolution logic without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Default output rules
//! - `value_objects/` - Platform, DefinitionPath, ConfigWarning
//! - `services/` - Default output path resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! Environment access and rule tables reach the domain only through the
//! traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
