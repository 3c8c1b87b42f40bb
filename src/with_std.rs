// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        fmt,
        hash,
        iter,
        str,
        string,
        vec,
    };

    pub use std::vec::Vec;

    #[cfg(test)]
    pub use std::collections::hash_map::DefaultHasher;
}
