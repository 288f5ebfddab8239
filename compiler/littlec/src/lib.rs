//! Little runner.
//!
//! [`Session`] is the embedding API: parse, evaluate against a standard
//! library root environment, keep definitions between calls. The `little`
//! binary is a thin layer of [`commands`] over it.
//!
//! ```text
//! let mut session = Session::new()?;
//! session.exec("(def :sq '(fn '(x) '(* x x)))")?;
//! assert_eq!(session.exec("(sq 7)")?, Value::Int(49));
//! ```

pub mod commands;
mod session;
mod tracing_setup;

pub use session::{LittleError, Session, SessionBuilder};
pub use tracing_setup::init_tracing;
