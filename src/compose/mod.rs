pub(crate) mod background;
pub(crate) mod blend;
pub(crate) mod bounds;
pub(crate) mod compositor;
pub(crate) mod export;
