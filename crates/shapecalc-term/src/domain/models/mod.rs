mod color_tag;

pub use color_tag::ColorTag;
