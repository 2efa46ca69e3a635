use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    U8,
    RGB8,
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        match self {
            ImageEncoding::U8 | ImageEncoding::RGB8 => value.max(0.0).min(255.0) as u8,
            ImageEncoding::F64 => {
                let range = 255 as Float; // 255 - 0
                if (max - min).abs() < Float::EPSILON {
                    return 0;
                }
                ((value - min) * (range / (max - min))) as u8
            }
        }
    }
}
