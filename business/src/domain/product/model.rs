/// Product record shown on the detail screen.
///
/// Built once per successful detail fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetail {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub amount: u64,
    pub image: String,
}

impl ProductDetail {
    pub fn new(id: u64, name: String, price: f64, amount: u64, image: String) -> Self {
        Self {
            id,
            name,
            price,
            amount,
            image,
        }
    }
}

/// Decoded image owned by whoever received it.
///
/// Pixels are RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, PartialEq)]
pub struct ImageBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageBuffer {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compare_details_structurally() {
        let a = ProductDetail::new(3, "Mug".to_string(), 9.99, 5, "https://x/y.png".to_string());
        let b = ProductDetail::new(3, "Mug".to_string(), 9.99, 5, "https://x/y.png".to_string());
        let c = ProductDetail::new(4, "Mug".to_string(), 9.99, 5, "https://x/y.png".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn should_default_to_empty_detail() {
        let detail = ProductDetail::default();
        assert_eq!(detail.id, 0);
        assert_eq!(detail.name, "");
        assert_eq!(detail.price, 0.0);
        assert_eq!(detail.amount, 0);
        assert_eq!(detail.image, "");
    }

    #[test]
    fn should_debug_image_buffer_without_dumping_pixels() {
        let buffer = ImageBuffer::new(vec![0; 16], 2, 2);
        assert_eq!(
            format!("{:?}", buffer),
            "ImageBuffer { width: 2, height: 2, bytes: 16 }"
        );
    }
}
