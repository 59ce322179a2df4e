pub mod tree_render;
