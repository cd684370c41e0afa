//! Handler methods for the App struct.
//!
//! Each module adds an `impl App` block for one area of the window.

mod browse;
mod discovery;
mod log;
