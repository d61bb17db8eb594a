mod processing;
mod texture;

pub use texture::dish_texture;
