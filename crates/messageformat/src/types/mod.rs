mod number;
mod value;

pub use number::Number;
pub(crate) use value::format_duration;
pub use value::Value;
