pub mod metrics;
pub mod persona;
pub mod providers;

pub use persona::persona_for;
