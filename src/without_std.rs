#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate siphasher;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        fmt,
        hash,
        iter,
        str,
    };

    #[cfg(test)]
    pub use siphasher::sip::SipHasher as DefaultHasher;

    pub use alloc::string;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}
