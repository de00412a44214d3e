//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! registry file (TOML)
//!     → loader.rs (locate, parse & deserialize)
//!     → validation.rs (resolve one environment, apply defaults)
//!     → ResolvedEnvironment (validated, immutable)
//!     → passed into the Launcher at construction time
//! ```
//!
//! # Design Decisions
//! - The registry is immutable once loaded; one environment per invocation
//! - Only launch type and region have defaults; everything else is required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{EnvironmentEntry, Registry, ResolvedEnvironment};
pub use validation::ValidationError;
