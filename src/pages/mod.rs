pub mod theme_demo;
