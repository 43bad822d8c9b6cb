//! optional — a contract-checked optional-value container
//!
//! ```
//! use optional::Optional;
//!
//! let five = Optional::of(5)?;
//! assert_eq!(*five.filter(|v| *v > 0).get()?, 5);
//! assert!(five.filter(|v| *v < 0).is_empty());
//! assert_eq!(Optional::<i32>::empty().or_else(Some(0)), Some(0));
//! assert_eq!(Optional::of(3.14159265359)?.to_string(), "Optional[3.14159265359]");
//! assert!(five.flat_map::<i32, _, _>(|v| *v).is_err());
//! assert!(Optional::<i32>::of(None).is_err());
//! # Ok::<(), optional::OptionalError>(())
//! ```

pub mod config;
pub mod equality;
pub mod logging;
pub mod optional;

mod contract;
mod serde_impl;

// Re-export commonly used items for convenience
pub use config::Config;
pub use equality::{DeepEqual, JsonComparator, PartialEqComparator};
pub use optional::Optional;
pub use optional_types::{BoxError, ConfigError, Expected, OptionalError, Parameter, Result};
