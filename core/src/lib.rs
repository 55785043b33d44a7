pub mod error;
pub mod image;
pub mod menu;
pub mod traits;

pub use error::ScanError;
pub use image::RawImage;
pub use menu::{Menu, MenuItem, MenuSection};
pub use traits::{Authorization, CaptureDevice, Facing, Presenter};
