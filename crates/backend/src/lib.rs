//! CORS-прокси SalesPro: пересылает `/api` на PHP-бэкенд и раздаёт собранный фронтенд.

pub mod handlers;
pub mod routes;
pub mod shared;
