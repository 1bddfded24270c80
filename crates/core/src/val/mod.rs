pub mod number;

pub use self::number::Number;
