pub mod client_types;
pub mod prediction_client;
pub mod service_trait;

#[cfg(test)]
pub(crate) mod scripted;
