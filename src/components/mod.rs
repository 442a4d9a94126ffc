pub mod navigation;
pub mod sections;
