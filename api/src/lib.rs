pub mod middleware;
pub mod pages;
pub mod qr;
pub mod response;
pub mod routes;
pub mod token;
