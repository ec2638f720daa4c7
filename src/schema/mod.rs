//! Schema model: program, sub-commands and their parameters

pub mod command;
pub mod param;
pub mod sub_command;

pub use command::CommandSchema;
pub use param::{ParamKind, ParameterSpec};
pub use sub_command::{Handler, Invocation, SubCommandDef, SubCommandSchema};
