pub mod origin;

pub use self::origin::*;
