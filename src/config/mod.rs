pub(crate) mod story;
