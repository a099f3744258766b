pub mod f32;
pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::io::{
    load_grayscale_image, save_mask, save_normalized_f32, save_rgb, write_json_file, GrayImageU8,
};
pub use self::mask::{BinaryMask, GridPoint};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
