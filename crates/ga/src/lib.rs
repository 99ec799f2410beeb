pub mod driver;
pub mod individual;
pub mod params;

pub use driver::Ga;
pub use individual::Individual;
pub use params::GaParams;
