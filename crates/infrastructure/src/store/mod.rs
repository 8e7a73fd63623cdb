pub mod memory;

pub use memory::MemoryForecastStore;
