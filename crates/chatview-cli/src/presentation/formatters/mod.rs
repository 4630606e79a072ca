pub mod number;
pub mod options;
pub mod text;
pub mod time;

pub use options::DisplayOptions;
