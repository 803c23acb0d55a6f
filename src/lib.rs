//! stayscore - hotel booking cancellation prediction and explanation service
//!
//! A thin inference-and-explanation layer over two trainer-exported
//! artifacts: a classification pipeline and its bound explainer. One form,
//! one prediction per submission, one explanation per prediction.

pub mod artifact;
pub mod booking;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod service;
