pub mod measure;

pub use measure::{ImageMeasure, MonospaceMeasure, TextMeasure};
