pub mod channel;
pub mod in_memory;
