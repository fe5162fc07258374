pub mod assets;
pub mod currency;
pub mod version;
