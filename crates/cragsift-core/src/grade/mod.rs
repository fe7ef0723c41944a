mod parse;
mod range;
mod scale;


pub use parse::{GradeParse, compare};
pub use range::GradeRange;
pub use scale::{Grade, GradeScale, ScaleVariant};
