pub(crate) mod colorize;
pub(crate) mod frame;
pub(crate) mod live;
