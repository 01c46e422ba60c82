// Continuous factors ready to be discretized
pub mod Custom;
pub mod Exponential;
pub mod Gamma;
pub mod Normal;
