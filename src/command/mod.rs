// ABOUTME: Command module - the token table, admission gate, and dispatcher.
// ABOUTME: Maps chat tokens to actions and decides whether they may run.

mod dispatcher;
mod gate;
mod palette;
mod table;

pub use dispatcher::{DispatchOutcome, Dispatcher, StatusReport};
pub use gate::{Admission, CommandGate, DenyReason};
pub use palette::PALETTE;
pub use table::{CommandAction, CommandDescriptor, CommandTable, Permission};
