//! Grayscale photo handling for the background-subtraction step.
//!
//! Alignment and the edge/line detector itself live outside this crate; what
//! remains here is loading chamber photos as 8-bit grayscale and removing
//! the static background so the detector only sees fresh tracks.

use image::GrayImage;
use std::fs;
use std::path::Path;

/// Minimum brightness a pixel must keep after subtraction; anything dimmer
/// is considered background residue and zeroed.
const RESIDUE_THRESHOLD: i16 = 5;

/// Owned 8-bit grayscale photo buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayPhoto {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayPhoto {
    /// Wraps raw row-major bytes. `data.len()` must equal `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, String> {
        if data.len() != width * height {
            return Err(format!(
                "Buffer size {} does not match {width}x{height}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Load a photo from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayPhoto, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayPhoto::new(width, height, img.into_raw())
}

/// Save an 8-bit grayscale photo, creating parent directories.
pub fn save_grayscale_image(photo: &GrayPhoto, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let image: GrayImage =
        GrayImage::from_raw(photo.width as u32, photo.height as u32, photo.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Removes the static chamber background from a photo.
///
/// Per pixel: `v = photo - 2 * background` in widened arithmetic; values
/// below the residue threshold are zeroed. Doubling the background
/// over-subtracts on purpose, wiping the permanent stripes while the much
/// brighter condensation trails survive.
pub fn subtract_background(photo: &GrayPhoto, background: &GrayPhoto) -> Result<GrayPhoto, String> {
    if (photo.width, photo.height) != (background.width, background.height) {
        return Err(format!(
            "Photo is {}x{} but background is {}x{}",
            photo.width, photo.height, background.width, background.height
        ));
    }
    let data = photo
        .data
        .iter()
        .zip(&background.data)
        .map(|(&p, &b)| {
            let v = p as i16 - 2 * b as i16;
            if v < RESIDUE_THRESHOLD {
                0
            } else {
                v as u8
            }
        })
        .collect();
    GrayPhoto::new(photo.width, photo.height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_must_match_dimensions() {
        assert!(GrayPhoto::new(2, 2, vec![0; 3]).is_err());
        assert!(GrayPhoto::new(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn subtraction_doubles_the_background_and_thresholds() {
        let photo = GrayPhoto::new(2, 2, vec![200, 100, 40, 0]).unwrap();
        let background = GrayPhoto::new(2, 2, vec![50, 48, 10, 0]).unwrap();
        let result = subtract_background(&photo, &background).unwrap();
        // 200 - 100 = 100; 100 - 96 = 4 -> below threshold; 40 - 20 = 20;
        // 0 - 0 = 0.
        assert_eq!(result.data(), &[100, 0, 20, 0]);
    }

    #[test]
    fn mismatched_dimensions_are_an_error() {
        let photo = GrayPhoto::new(2, 1, vec![0, 0]).unwrap();
        let background = GrayPhoto::new(1, 2, vec![0, 0]).unwrap();
        assert!(subtract_background(&photo, &background).is_err());
    }
}
