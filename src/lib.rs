// Biblioteca do podio-items
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod report;
pub mod utils;
