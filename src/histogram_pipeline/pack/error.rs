use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    #[error("Count {value} at bin {bin} in camera {camera} exceeds 21 bits")]
    FieldOverflow {
        camera: usize,
        bin: usize,
        value: u32,
    },
}
