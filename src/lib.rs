//! Slash command resolution and markdown command definitions.
//!
//! ```
//! use slash_dispatch::internal::commands::{CommandResolver, ParsedInput};
//!
//! let resolver = CommandResolver::new();
//! match resolver.parse("/plan add user auth") {
//!     ParsedInput::Resolved(cmd) => assert_eq!(cmd.args, ["add", "user", "auth"]),
//!     ParsedInput::Rejected(r) => panic!("{}", r.message),
//! }
//! ```

pub mod cli;
pub mod command;
pub mod internal;
