// Crate-internal.
// ---

pub(crate) mod demo {
    pub(crate) mod dataset;
}

pub(crate) mod standard_habits {
    pub(crate) mod core;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod demo {
        pub use crate::impl_ext::demo::dataset::*;
    }

    pub mod standard_habits {
        pub use crate::impl_ext::standard_habits::core::*;
    }
}
