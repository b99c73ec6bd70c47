pub mod archetype;
pub mod category;
pub mod creature;
pub mod ecosystem;
