pub mod serde;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub mod sandbox;
