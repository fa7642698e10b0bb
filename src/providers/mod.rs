pub mod figma;
