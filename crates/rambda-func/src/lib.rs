pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod response;
pub mod telemetry;

pub use config::{ConfigError, LogConfig, LogFormat};
pub use error::{FuncError, Result};
pub use event::{parse_event, read_event};
pub use handler::{greet, handler, invoke, Invocation, InvocationResult};
pub use response::{Response, GREETING};
pub use telemetry::{init_from_env, init_tracing};
