//! Cross-crate scenarios run against real files in a temp directory.

#[cfg(test)]
mod analysis;
#[cfg(test)]
mod booking;
