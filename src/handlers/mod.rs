pub mod drivers;
pub mod race;
pub mod standings;
