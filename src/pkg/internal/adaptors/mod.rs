pub mod empresas;
pub mod eventos;
pub mod formaciones;
pub mod lookups;
pub mod notifications;
pub mod trabajos;
pub mod users;
