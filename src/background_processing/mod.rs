pub(crate) mod health_endpoint;
