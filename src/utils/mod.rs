pub mod file;
pub mod naming;
pub mod logging;

pub use file::{read_text, write_atomically};
pub use naming::{clean_name, default_font_name, default_image_file, default_output_path};
