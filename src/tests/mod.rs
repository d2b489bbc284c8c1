// Shared helpers and mocks
#[cfg(test)]
pub mod common;

#[cfg(test)]
mod theme;
#[cfg(test)]
mod routes;
