use crate::models::BarcodeOptions;
use crate::processing::barcode::Code128Encoder;
use crate::utils::{NricError, Result};
use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use log::debug;
use std::io::Cursor;
use std::path::Path;

/// Blank rows above and below the bars, in modules.
pub const VERTICAL_MARGIN_MODULES: u32 = 4;

const WHITE: Luma<u8> = Luma([255u8]);
const BLACK: Luma<u8> = Luma([0u8]);

/// Renders Code128 barcodes as grayscale PNG images.
pub struct BarcodeRenderer;

impl BarcodeRenderer {
    /// Encode `data` as Code128 and return PNG bytes.
    pub fn render_png(data: &str, options: &BarcodeOptions) -> Result<Vec<u8>> {
        let image = Self::render(data, options)?;

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .map_err(|e| NricError::ImageEncoding(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }

    /// Encode `data` as Code128 and draw it into a grayscale image.
    pub fn render(data: &str, options: &BarcodeOptions) -> Result<GrayImage> {
        let options = options.bounded();
        let modules = Code128Encoder::modules(data)?;

        let module_width = options.module_width;
        let margin = module_width * VERTICAL_MARGIN_MODULES;
        let width = (modules.len() as u32 + 2 * options.quiet_zone) * module_width;
        let height = options.bar_height + 2 * margin;

        debug!("Rendering {} modules at {}x{} px", modules.len(), width, height);

        let mut image = GrayImage::from_pixel(width, height, WHITE);

        // Draw each run of adjacent bar modules as one rectangle
        let mut index = 0;
        while index < modules.len() {
            if modules[index] == 0 {
                index += 1;
                continue;
            }

            let start = index;
            while index < modules.len() && modules[index] == 1 {
                index += 1;
            }

            let x = (options.quiet_zone + start as u32) * module_width;
            let run_width = (index - start) as u32 * module_width;
            let rect = Rect::at(x as i32, margin as i32).of_size(run_width, options.bar_height);
            draw_filled_rect_mut(&mut image, rect, BLACK);
        }

        Ok(image)
    }

    /// Render a PNG and write it to `path`.
    pub fn save_png(data: &str, options: &BarcodeOptions, path: &Path) -> Result<()> {
        let bytes = Self::render_png(data, options)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
