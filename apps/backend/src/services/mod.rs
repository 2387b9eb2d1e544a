pub mod registry;
pub mod table_actor;

pub use registry::TableRegistry;
pub use table_actor::{TableActor, TableCommand, TableHandle, TableUpdate, TimerKind};
