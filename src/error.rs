use thiserror::Error;

#[derive(Debug, Error)]
pub enum HogError {
    #[error("unsupported pixel encoding: {0}")]
    UnsupportedEncoding(String),
    #[error("image is {image_width}x{image_height} but mask is {mask_width}x{mask_height}")]
    DimensionMismatch {
        image_width: usize,
        image_height: usize,
        mask_width: usize,
        mask_height: usize
    },
    #[error("invalid hog parameters: {0}")]
    Parameters(String),
    #[error("plotting failed: {0}")]
    Plot(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Image(#[from] image_rs::ImageError)
}
