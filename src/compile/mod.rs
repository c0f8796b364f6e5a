pub(crate) mod annotation;
pub(crate) mod axis;
pub(crate) mod draw;
