// Library surface for the binary and headless/integration tests.
pub mod app_dirs;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod notifier;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod ui;
pub mod util;
