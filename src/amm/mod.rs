pub mod types;
pub mod fraction;
pub mod percent;
pub mod exchange;
pub mod mint;
pub mod price_impact;

// erros unificados
pub mod error_catalog;
pub mod error;
pub mod error_map;
