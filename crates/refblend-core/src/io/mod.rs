pub mod output;
pub mod payload;

pub use output::{save_all, save_generated, save_generated_as};
pub use payload::{decode_image, decode_thumbnail, detect_mime, image_dimensions, load_payload, DecodedImage};
