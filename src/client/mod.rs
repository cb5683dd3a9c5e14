pub mod app;
pub mod components;
pub mod router;
pub mod routes;

#[cfg(test)]
mod tests;

pub use app::App;
