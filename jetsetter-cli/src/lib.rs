pub mod console;
pub mod input;

pub use console::ConsoleNavigator;
pub use input::FormInput;
