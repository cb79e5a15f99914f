pub mod io;
pub mod overlay;
pub mod warp;

pub use self::io::{load_rgb_image, save_rgb_image, write_json_file};
pub use self::warp::warp_to_bounds;
