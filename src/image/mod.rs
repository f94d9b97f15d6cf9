pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::{ImageRgbaF32, Rgba, ALPHA, CHANNELS};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::u8::ImageRgbaU8;
