pub(crate) mod rotated_rect;
