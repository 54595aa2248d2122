pub mod table;

pub use table::{TableDisplay, render_json};
