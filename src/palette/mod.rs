pub(crate) mod gradient;
pub(crate) mod lut;
