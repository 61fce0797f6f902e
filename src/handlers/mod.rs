pub mod health;
pub mod start_vm;

pub use health::health_handler;
pub use start_vm::{start_virtual_machine, start_virtual_machine_get};
