mod device_classes;
mod normalize;
mod validate;

pub use device_classes::device_classes;
pub use normalize::normalize;
pub use validate::validate;
