pub mod auth;
pub mod generate;
pub mod health;
pub mod repos;

#[cfg(test)]
pub(crate) mod test_support;


#[cfg(test)]
mod repos_http_tests;



pub use auth::configure_auth_routes;
pub use generate::configure_generate_routes;
pub use repos::configure_repo_routes;
