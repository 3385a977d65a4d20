//! Cross-crate scenarios for the examples in `solid-core`.

mod liskov {
    mod integration;
}

mod open_closed {
    mod integration;
}

mod dependency_inversion {
    mod integration;
}
