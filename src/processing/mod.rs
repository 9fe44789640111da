pub mod barcode;
pub mod render;

pub use barcode::Code128Encoder;
pub use render::BarcodeRenderer;
