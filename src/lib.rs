pub mod cli;
pub mod host;
pub mod io;
pub mod logging;
pub mod model;
pub mod ops;
pub mod panel;
pub mod parse;
pub mod tui;
pub mod util;
