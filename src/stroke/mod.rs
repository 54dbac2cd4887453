pub(crate) mod accumulator;
pub(crate) mod buffer;
pub(crate) mod model;
pub(crate) mod sampler;
