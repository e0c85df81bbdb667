//! Tools module containing the tool abstraction and the reservation tools

pub mod booking;
pub mod function_factory;
pub mod tool;
pub mod trains;

pub use booking::{BookTicketTool, BookingDesk, UNAVAILABLE};
pub use function_factory::FunctionFactory;
pub use tool::{Tool, ToolFuture, ToolRegistry};
pub use trains::{TrainCatalog, TrainRouteTool};
