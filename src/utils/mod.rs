pub mod helper;

mod window;
pub use window::Windows;
