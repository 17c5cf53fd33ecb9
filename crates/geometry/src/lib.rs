#[macro_export]
macro_rules! pub_mod_and_use {
    ($($module:ident), +) => {
        $(
            pub mod $module;
            pub use self::$module::*;
        )+
    };
}

pub_mod_and_use!(point, slope, line_segment);
