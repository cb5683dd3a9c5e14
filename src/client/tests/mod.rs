//! Rendering and routing tests for the client shell.

mod footer;
mod not_found;
